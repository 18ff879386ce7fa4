use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{CallStatus, Priority};

/// Mock datasets backing the request-queue views. Until the console is wired
/// to a real routing backend these are seeded relative to the given clock.

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WhatsAppRequest {
    pub id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PhoneRequest {
    pub id: String,
    pub customer_name: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IncomingCall {
    pub id: String,
    pub customer_name: String,
    pub number: String,
    pub timestamp: DateTime<Utc>,
    pub status: CallStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActiveCall {
    pub customer_name: String,
    pub number: String,
    pub started_at: DateTime<Utc>,
}

impl ActiveCall {
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }
}

pub fn whatsapp_requests(now: DateTime<Utc>) -> Vec<WhatsAppRequest> {
    let request = |id: &str, name: &str, phone: &str, message: &str, mins, priority| {
        WhatsAppRequest {
            id: id.to_string(),
            customer_name: name.to_string(),
            phone_number: phone.to_string(),
            message: message.to_string(),
            timestamp: now - Duration::minutes(mins),
            priority,
        }
    };

    vec![
        request(
            "1",
            "Sarah Johnson",
            "+1-555-0123",
            "I need help with my recent order #12345",
            5,
            Priority::High,
        ),
        request(
            "2",
            "Mike Chen",
            "+1-555-0124",
            "When will my refund be processed?",
            15,
            Priority::Medium,
        ),
        request(
            "3",
            "Emily Davis",
            "+1-555-0125",
            "Can I change my delivery address?",
            30,
            Priority::Low,
        ),
        request(
            "4",
            "David Wilson",
            "+1-555-0126",
            "Product arrived damaged, need replacement",
            45,
            Priority::High,
        ),
        request(
            "5",
            "Lisa Brown",
            "+1-555-0127",
            "How do I track my order?",
            60,
            Priority::Medium,
        ),
    ]
}

pub fn phone_requests(now: DateTime<Utc>) -> Vec<PhoneRequest> {
    let request = |id: &str, name: &str, reason: &str, mins, priority| PhoneRequest {
        id: id.to_string(),
        customer_name: name.to_string(),
        reason: reason.to_string(),
        timestamp: now - Duration::minutes(mins),
        priority,
    };

    vec![
        request("1", "Emma Davis", "Technical Support", 1, Priority::High),
        request("2", "Tom Anderson", "Sales Inquiry", 3, Priority::Medium),
        request("3", "Rachel Green", "Billing Question", 7, Priority::Low),
    ]
}

pub fn incoming_calls(now: DateTime<Utc>) -> Vec<IncomingCall> {
    let call = |id: &str, name: &str, number: &str, secs| IncomingCall {
        id: id.to_string(),
        customer_name: name.to_string(),
        number: number.to_string(),
        timestamp: now - Duration::seconds(secs),
        status: CallStatus::Ringing,
    };

    vec![
        call("1", "Alex Turner", "+1-555-0123", 30),
        call("2", "Maria Garcia", "+1-555-0456", 60),
        call("3", "James Wilson", "+1-555-0789", 120),
    ]
}

pub fn active_call(now: DateTime<Utc>) -> ActiveCall {
    ActiveCall {
        customer_name: "Manish".to_string(),
        number: "+1-555-0123".to_string(),
        started_at: now - Duration::seconds(12 * 60 + 34),
    }
}

pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();

        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(90), now), "1h ago");
        assert_eq!(format_time_ago(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn seeded_queues_have_expected_sizes() {
        let now = Utc::now();

        assert_eq!(whatsapp_requests(now).len(), 5);
        assert_eq!(phone_requests(now).len(), 3);
        assert_eq!(incoming_calls(now).len(), 3);
    }

    #[test]
    fn incoming_calls_are_all_ringing() {
        let now = Utc::now();
        assert!(incoming_calls(now)
            .iter()
            .all(|c| c.status == CallStatus::Ringing));
    }

    #[test]
    fn active_call_duration_tracks_clock() {
        let now = Utc::now();
        let call = active_call(now);
        assert_eq!(call.duration(now).num_seconds(), 12 * 60 + 34);
    }
}
