//! Classification of plain message updates. Each message maps to exactly one
//! [`IncomingMessage`] variant and the handler matches on it.

use teloxide::types::{Chat, Message};

/// What kind of chat a message arrived in, as far as routing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    Private,
    /// Basic groups and supergroups are treated alike.
    Group,
    Other,
}

impl ChatScope {
    pub fn of(chat: &Chat) -> Self {
        if chat.is_private() {
            ChatScope::Private
        } else if chat.is_group() || chat.is_supergroup() {
            ChatScope::Group
        } else {
            ChatScope::Other
        }
    }
}

/// The parts of a message routing depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFacts<'a> {
    pub has_new_members: bool,
    pub has_left_member: bool,
    pub text: Option<&'a str>,
}

impl<'a> MessageFacts<'a> {
    pub fn of(msg: &'a Message) -> Self {
        Self {
            has_new_members: msg.new_chat_members().is_some_and(|members| !members.is_empty()),
            has_left_member: msg.left_chat_member().is_some(),
            text: msg.text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomingMessage<'a> {
    /// "X joined the group" service message.
    MembersJoined,
    /// "X left the group" service message.
    MemberLeft,
    /// Anything else posted in a group.
    GroupActivity,
    /// Text in a private chat with the bot.
    PrivateText(&'a str),
    Ignored,
}

/// Join/leave service messages win over generic group activity.
pub fn classify(scope: ChatScope, facts: MessageFacts<'_>) -> IncomingMessage<'_> {
    match scope {
        ChatScope::Group if facts.has_new_members => IncomingMessage::MembersJoined,
        ChatScope::Group if facts.has_left_member => IncomingMessage::MemberLeft,
        ChatScope::Group => IncomingMessage::GroupActivity,
        ChatScope::Private => match facts.text {
            Some(text) => IncomingMessage::PrivateText(text),
            None => IncomingMessage::Ignored,
        },
        ChatScope::Other => IncomingMessage::Ignored,
    }
}

pub fn classify_message(msg: &Message) -> IncomingMessage<'_> {
    classify(ChatScope::of(&msg.chat), MessageFacts::of(msg))
}
