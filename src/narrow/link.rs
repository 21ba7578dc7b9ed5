// Narrow link serialization.
//
// Builds the `#narrow/...` fragment left to right and replaces the realm
// base URL's fragment with it. The fragment must match the companion web
// client byte for byte: operator names, operand encodings, and the
// legacy-vs-modern direct-message spelling are all fixed conventions.

use url::Url;

use super::hash::encode_hash_component;
use super::{Narrow, NarrowElement};
use crate::model::{RealmContext, StreamDirectory};

/// Serialize a narrow plus optional anchor into a link into the realm.
///
/// Unresolved direct-message elements are resolved against the realm's
/// capability level once, before the serialization loop. An empty
/// expression still yields a well-formed `#narrow` fragment.
pub fn narrow_link(
    realm: &RealmContext,
    narrow: &[NarrowElement],
    streams: &StreamDirectory,
    near_message_id: Option<u64>,
) -> Url {
    #[cfg(feature = "tracing")]
    tracing::trace!(elements = narrow.len(), near = ?near_message_id, "serializing narrow link");

    let resolved: Vec<NarrowElement> = narrow
        .iter()
        .map(|element| NarrowElement {
            filter: element.filter.clone().resolve_dm(realm.capability_level),
            negated: element.negated,
        })
        .collect();

    let mut fragment = String::from("narrow");
    for element in &resolved {
        fragment.push('/');
        if element.negated {
            fragment.push('-');
        }
        match &element.filter {
            Narrow::Stream(stream_id) => {
                let name = streams.get(stream_id).map(String::as_str).unwrap_or("unknown");
                let slug = encode_hash_component(&name.replace(' ', "-"));
                fragment.push_str(&format!("stream/{stream_id}-{slug}"));
            }
            Narrow::Topic(topic) => {
                fragment.push_str("topic/");
                fragment.push_str(&encode_hash_component(topic));
            }
            Narrow::DmModern(ids) => {
                fragment.push_str("dm/");
                fragment.push_str(&dm_operand(ids, "dm"));
            }
            Narrow::DmLegacy(ids) => {
                fragment.push_str("pm-with/");
                fragment.push_str(&dm_operand(ids, "pm"));
            }
            Narrow::Dm(_) => unreachable!("direct-message filter left unresolved"),
            Narrow::MessageId(id) => {
                fragment.push_str(&format!("id/{id}"));
            }
        }
    }
    if let Some(id) = near_message_id {
        fragment.push_str(&format!("/near/{id}"));
    }

    let mut url = realm.base_url.clone();
    url.set_fragment(Some(&fragment));
    url
}

/// Comma-joined ids plus the conversation-size suffix: 3 or more
/// participants make a `group`, fewer take the operator's singular suffix.
fn dm_operand(ids: &[u64], singular: &str) -> String {
    let joined = ids.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
    let suffix = if ids.len() >= 3 { "group" } else { singular };
    format!("{joined}-{suffix}")
}
