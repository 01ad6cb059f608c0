use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One page's crawl result as returned by the remote service.
///
/// The service occasionally returns partial nodes (a fetch that failed
/// upstream, a truncated record). Decoding is therefore lenient: a missing
/// or wrongly-typed field becomes `None` instead of failing the whole tree,
/// and a malformed entry inside `children` becomes a faulted node so its
/// siblings still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkNode {
    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_i64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<LinkNode>,
}

impl LinkNode {
    /// The three fields every presentable node must carry, or `None` if any
    /// is absent. `None` marks a faulted node.
    pub fn parts(&self) -> Option<(&str, i64, &str)> {
        Some((
            self.url.as_deref()?,
            self.status_code?,
            self.status.as_deref()?,
        ))
    }

    /// Total node count, this node included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(LinkNode::size).sum::<usize>()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<LinkNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_node() {
        let node: LinkNode = serde_json::from_str(
            r#"{"url":"http://example.onion","status_code":200,"status":"OK","children":[]}"#,
        )
        .unwrap();
        assert_eq!(
            node.parts(),
            Some(("http://example.onion", 200, "OK"))
        );
        assert!(node.children.is_empty());
    }

    #[test]
    fn missing_fields_become_faulted_node() {
        let node: LinkNode =
            serde_json::from_str(r#"{"url":"http://example.onion"}"#).unwrap();
        assert!(node.parts().is_none());
        assert_eq!(node.url.as_deref(), Some("http://example.onion"));
    }

    #[test]
    fn wrongly_typed_fields_decode_as_absent() {
        let node: LinkNode = serde_json::from_str(
            r#"{"url":42,"status_code":"200","status":["OK"],"children":{}}"#,
        )
        .unwrap();
        assert!(node.url.is_none());
        assert!(node.status_code.is_none());
        assert!(node.status.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn malformed_child_does_not_poison_siblings() {
        let node: LinkNode = serde_json::from_str(
            r#"{"url":"http://example.onion","status_code":200,"status":"OK",
                "children":["garbage",
                            {"url":"http://example.onion/a","status_code":404,
                             "status":"Not Found","children":[]}]}"#,
        )
        .unwrap();
        assert_eq!(node.children.len(), 2);
        assert!(node.children[0].parts().is_none());
        assert_eq!(
            node.children[1].parts(),
            Some(("http://example.onion/a", 404, "Not Found"))
        );
    }

    #[test]
    fn negative_status_codes_survive_decoding() {
        let node: LinkNode = serde_json::from_str(
            r#"{"url":"http://example.onion","status_code":-1,"status":"dead","children":[]}"#,
        )
        .unwrap();
        assert_eq!(node.status_code, Some(-1));
    }

    #[test]
    fn size_counts_every_node() {
        let node: LinkNode = serde_json::from_str(
            r#"{"url":"a","status_code":200,"status":"OK","children":[
                {"url":"b","status_code":200,"status":"OK","children":[
                    {"url":"c","status_code":200,"status":"OK","children":[]}]},
                {"url":"d","status_code":200,"status":"OK","children":[]}]}"#,
        )
        .unwrap();
        assert_eq!(node.size(), 4);
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let node = LinkNode::default();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"children":[]}"#);
    }
}
