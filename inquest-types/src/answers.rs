use crate::Answer;

/// The collected answers of a questionnaire, keyed by question name.
///
/// Entries keep the order in which they were inserted, which is the order
/// the questions were asked in. A skipped question never appears here.
/// Lookups are linear; batches are small by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    entries: Vec<(String, Answer)>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an answer under the given name.
    ///
    /// If the name is already present its value is replaced in place,
    /// keeping the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Answer>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Get the answer stored under the given name.
    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether an answer exists under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the name-answer pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    // === Convenience accessors ===

    /// Get a string answer under the given name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Answer::as_str)
    }

    /// Get a boolean answer under the given name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Answer::as_bool)
    }

    /// Get an integer answer under the given name.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Answer::as_int)
    }

    /// Get a list answer under the given name.
    pub fn get_list(&self, name: &str) -> Option<&[Answer]> {
        self.get(name).and_then(Answer::as_list)
    }
}

impl IntoIterator for Answers {
    type Item = (String, Answer);
    type IntoIter = std::vec::IntoIter<(String, Answer)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("name", "Alice");
        answers.insert("age", Answer::Int(30));

        assert_eq!(answers.get_str("name"), Some("Alice"));
        assert_eq!(answers.get_int("age"), Some(30));
        assert!(!answers.contains("missing"));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut answers = Answers::new();
        answers.insert("b", 1);
        answers.insert("a", 2);
        answers.insert("c", 3);

        let names: Vec<&str> = answers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut answers = Answers::new();
        answers.insert("a", 1);
        answers.insert("b", 2);
        answers.insert("a", 3);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get_int("a"), Some(3));
        let names: Vec<&str> = answers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
