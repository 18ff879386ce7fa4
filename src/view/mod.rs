use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queue::model::{
    ActiveCall, IncomingCall, PhoneRequest, WhatsAppRequest, active_call, incoming_calls,
    phone_requests, whatsapp_requests,
};

/// Side-panel navigation entries. Anything unrecognized falls back to the
/// assistant chat list, so parsing is total.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Navigation {
    #[default]
    #[serde(rename = "ai-assistant")]
    AiAssistant,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "incoming")]
    Incoming,
    #[serde(rename = "active-call")]
    ActiveCall,
}

impl Navigation {
    pub const fn as_str(&self) -> &str {
        match self {
            Self::AiAssistant => "ai-assistant",
            Self::WhatsApp => "whatsapp",
            Self::Phone => "phone",
            Self::Incoming => "incoming",
            Self::ActiveCall => "active-call",
        }
    }
}

impl From<&str> for Navigation {
    fn from(value: &str) -> Self {
        match value {
            "whatsapp" => Self::WhatsApp,
            "phone" => Self::Phone,
            "incoming" => Self::Incoming,
            "active-call" => Self::ActiveCall,
            _ => Self::AiAssistant,
        }
    }
}

/// Exactly one of these renders at a time in the list panel.
#[derive(Clone, Debug)]
pub enum View {
    ChatList,
    WhatsAppRequests(Vec<WhatsAppRequest>),
    PhoneRequests(Vec<PhoneRequest>),
    IncomingCalls(Vec<IncomingCall>),
    ActiveCall(ActiveCall),
}

pub fn select(navigation: Navigation, now: DateTime<Utc>) -> View {
    match navigation {
        Navigation::WhatsApp => View::WhatsAppRequests(whatsapp_requests(now)),
        Navigation::Phone => View::PhoneRequests(phone_requests(now)),
        Navigation::Incoming => View::IncomingCalls(incoming_calls(now)),
        Navigation::ActiveCall => View::ActiveCall(active_call(now)),
        Navigation::AiAssistant => View::ChatList,
    }
}
