use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "paperdl.v1";

#[derive(Debug, Clone, Serialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Which payload slot an envelope carries; `apply` follows from it.
enum Body {
    Plan(Value),
    Result(Value),
}

impl Envelope {
    pub fn plan<T: Serialize>(op: &'static str, plan: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        Ok(Self::new(op, Body::Plan(serde_json::to_value(plan)?), meta))
    }

    pub fn result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        Ok(Self::new(op, Body::Result(serde_json::to_value(result)?), meta))
    }

    fn new(op: &'static str, body: Body, meta: Option<Meta>) -> Self {
        let (apply, plan, result) = match body {
            Body::Plan(v) => (false, Some(v), None),
            Body::Result(v) => (true, None, Some(v)),
        };
        Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            apply,
            plan,
            result,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_plan_envelope() {
        let plan = json!({"papers": [{"url": "https://arxiv.org/abs/1234.5678", "source": "arxiv"}]});
        let env = Envelope::plan("download", &plan, None).expect("to serialize plan");
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"schema_version\":\"paperdl.v1\""));
        assert!(s.contains("\"plan\""));
        assert!(s.contains("\"apply\":false"));
        assert!(!s.contains("\"meta\""));
    }

    #[test]
    fn serialize_result_envelope_with_duration() {
        let result = json!({"papers": []});
        let meta = Meta { duration_ms: Some(12) };
        let env = Envelope::result("download", &result, Some(meta)).expect("to serialize result");
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["apply"], true);
        assert_eq!(v["op"], "download");
        assert_eq!(v["meta"]["duration_ms"], 12);
        assert!(v.get("plan").is_none());
    }

    #[test]
    fn each_envelope_gets_fresh_request_id() {
        let a = Envelope::result("download", &json!({}), None).unwrap();
        let b = Envelope::result("download", &json!({}), None).unwrap();
        assert_ne!(a.request_id, b.request_id);
        assert!(b.time >= a.time);
    }
}
