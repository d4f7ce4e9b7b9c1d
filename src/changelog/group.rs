//! Grouping of commit subjects by their leading token.

use std::collections::HashMap;

/// Commit subjects grouped by leading token, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeGroup {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ChangeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the group for its key, creating the group on first use.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        let key = group_key(&message).to_string();

        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(message),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![message]));
            }
        }
    }

    /// Iterate `(key, messages)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Messages for one key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of messages across all groups.
    pub fn message_count(&self) -> usize {
        self.groups.iter().map(|(_, messages)| messages.len()).sum()
    }
}

impl<S: Into<String>> FromIterator<S> for ChangeGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut group = ChangeGroup::new();
        for message in iter {
            group.push(message);
        }
        group
    }
}

/// The part of a message before its first whitespace character; the whole
/// message if it has none.
pub fn group_key(message: &str) -> &str {
    match message.find(char::is_whitespace) {
        Some(end) => &message[..end],
        None => message,
    }
}

/// Group an ordered sequence of messages by leading token.
pub fn group<I, S>(messages: I) -> ChangeGroup
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    messages.into_iter().collect()
}
