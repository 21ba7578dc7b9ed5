// Quote-and-reply composition.
//
// Builds the Markdown body a client inserts when quoting a message: a
// header line that mentions the sender silently and links "said" to the
// message's conversation, then the quoted raw content in a `quote` fence
// (or a loading placeholder while the content is still being fetched).

pub mod fence;

use url::Url;

use crate::model::{Message, RealmContext, StreamDirectory, User, UserDirectory};
use crate::narrow::link::narrow_link;
use crate::narrow::NarrowElement;

use self::fence::wrap_with_backtick_fence;

/// Render an @-mention token for `user`.
///
/// With no directory the disambiguating `|id` suffix is always included
/// (the safe default); with one, the suffix is included only when another
/// user shares the full name. The collision scan is linear and stops at the
/// second match.
///
/// # Examples
///
/// ```
/// use chatmark::model::User;
///
/// let user = User { user_id: 13313, full_name: "Chris Bobbe".to_owned() };
/// assert_eq!(chatmark::user_mention(&user, false, None), "@**Chris Bobbe|13313**");
/// assert_eq!(chatmark::user_mention(&user, true, None), "@_**Chris Bobbe|13313**");
/// ```
pub fn user_mention(user: &User, silent: bool, users: Option<&UserDirectory>) -> String {
    let include_user_id = match users {
        None => true,
        Some(users) => {
            users
                .values()
                .filter(|candidate| candidate.full_name == user.full_name)
                .take(2)
                .count()
                == 2
        }
    };

    let marker = if silent { "_" } else { "" };
    if include_user_id {
        format!("@{marker}**{}|{}**", user.full_name, user.user_id)
    } else {
        format!("@{marker}**{}**", user.full_name)
    }
}

/// Render a Markdown inline link.
///
/// Neither field is escaped: callers choose visible text and destinations
/// that keep the `[text](url)` syntax intact.
pub fn inline_link(visible_text: &str, destination: Option<&Url>) -> String {
    format!("[{}]({})", visible_text, destination.map(Url::as_str).unwrap_or(""))
}

/// The header line both quote-and-reply forms share, up to the colon.
///
/// Panics if the sender is missing from `users`: the caller must have the
/// quoted message's sender resident in its directory.
fn quote_header(
    realm: &RealmContext,
    narrow: &[NarrowElement],
    streams: &StreamDirectory,
    users: &UserDirectory,
    message: &Message,
) -> String {
    let sender = users
        .get(&message.sender_id)
        .expect("sender of quoted message must be in the user directory");
    let link = narrow_link(realm, narrow, streams, Some(message.id));
    format!("{} {}:", user_mention(sender, true, None), inline_link("said", Some(&link)))
}

/// Placeholder body shown while the quoted message's raw content loads.
///
/// `narrow` is the already-built filter expression for the conversation
/// containing `message`; the link anchors at the message id.
pub fn quote_and_reply_placeholder(
    realm: &RealmContext,
    narrow: &[NarrowElement],
    streams: &StreamDirectory,
    users: &UserDirectory,
    message: &Message,
) -> String {
    let header = quote_header(realm, narrow, streams, users, message);
    format!("{header} *(loading message {})*\n", message.id)
}

/// Final quote-and-reply body embedding the message's raw content.
///
/// Shares its header with [`quote_and_reply_placeholder`]; only the body
/// after the colon differs.
///
/// # Examples
///
/// ```
/// use chatmark::model::{Message, RealmContext, StreamDirectory, User, UserDirectory};
/// use chatmark::narrow::{Narrow, NarrowElement};
///
/// let realm = RealmContext::new("https://chat.example", 200).unwrap();
/// let streams = StreamDirectory::from([(48, "mobile".to_owned())]);
/// let users = UserDirectory::from([
///     (13313, User { user_id: 13313, full_name: "Chris Bobbe".to_owned() }),
/// ]);
/// let narrow = vec![
///     NarrowElement::new(Narrow::Stream(48)),
///     NarrowElement::new(Narrow::Topic("greetings".to_owned())),
/// ];
/// let message = Message { id: 1234, sender_id: 13313 };
///
/// let body = chatmark::quote_and_reply(&realm, &narrow, &streams, &users, &message, "hi");
/// let link = "https://chat.example/#narrow/stream/48-mobile/topic/greetings/near/1234";
/// assert!(body.starts_with(&format!("@_**Chris Bobbe|13313** [said]({link}):\n")));
/// assert!(body.ends_with("quote\nhi\n```\n"));
/// ```
pub fn quote_and_reply(
    realm: &RealmContext,
    narrow: &[NarrowElement],
    streams: &StreamDirectory,
    users: &UserDirectory,
    message: &Message,
    raw_content: &str,
) -> String {
    #[cfg(feature = "tracing")]
    tracing::trace!(message_id = message.id, "composing quote-and-reply");

    let header = quote_header(realm, narrow, streams, users, message);
    format!("{header}\n{}", wrap_with_backtick_fence(raw_content, Some("quote")))
}
