use crate::domain::model::{Subscriber, SubscriberRecord};

/// Keeps the subscribers of `component_id`, projected to the exported fields.
/// Input order is preserved.
pub fn filter_by_component(subscribers: &[Subscriber], component_id: &str) -> Vec<SubscriberRecord> {
    subscribers
        .iter()
        .filter(|subscriber| subscriber.is_subscribed_to(component_id))
        .map(SubscriberRecord::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subscribers() -> Vec<Subscriber> {
        serde_json::from_value(json!([
            {
                "id": "s1",
                "email": "a@x.com",
                "created_at": "2024-01-02T03:04:05Z",
                "mode": "email",
                "phone_number": null,
                "components": ["c1", "c2"],
                "skip_confirmation_notification": true
            },
            {"id": "s2", "email": "b@x.com", "components": ["c2"]},
            {"id": "s3", "mode": "sms", "phone_number": "+15550100", "components": ["c1"]},
            {"id": "s4", "email": "d@x.com"},
            {"id": "s5", "email": "e@x.com", "components": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_keeps_only_members_in_order() {
        let records = filter_by_component(&subscribers(), "c1");

        let ids: Vec<_> = records.iter().map(|r| r.id.clone().unwrap()).collect();
        assert_eq!(ids, vec![json!("s1"), json!("s3")]);
        assert_eq!(records[0].mode, Some(json!("email")));
        assert_eq!(records[1].phone_number, Some(json!("+15550100")));
        assert!(records[1].email.is_none());
    }

    #[test]
    fn test_values_pass_through_untouched() {
        let input: Vec<Subscriber> = serde_json::from_value(json!([
            {"id": "s1", "email": "a@x.com", "components": ["c1"]},
            {"id": "s2", "phone_number": 15550100, "components": ["c2"]},
            {"id": 7, "phone_number": 15550111, "mode": null, "components": ["c1"]}
        ]))
        .unwrap();

        let records = filter_by_component(&input, "c1");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(json!("s1")));
        assert_eq!(records[1].id, Some(json!(7)));
        assert_eq!(records[1].phone_number, Some(json!(15550111)));
        assert!(records[1].mode.is_none());
    }

    #[test]
    fn test_record_has_exactly_whitelisted_fields() {
        let records = filter_by_component(&subscribers(), "c1");
        let value = serde_json::to_value(&records[0]).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();

        let mut expected: Vec<String> =
            SubscriberRecord::FIELDS.iter().map(|f| f.to_string()).collect();
        let mut actual = keys;
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_by_component(&subscribers(), "c9").is_empty());
        assert!(filter_by_component(&[], "c1").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let input = subscribers();
        assert_eq!(
            filter_by_component(&input, "c2"),
            filter_by_component(&input, "c2")
        );
    }
}
