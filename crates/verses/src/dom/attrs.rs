// ABOUTME: Class and attribute helpers operating on a single element.
// ABOUTME: Token order is preserved and every mutation is idempotent.

use super::{Attribute, Element};

impl Element {
    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Update the first attribute named `key`, or append it.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.key == key) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute::new(key, value)),
        }
    }

    /// Remove the first attribute named `key`.
    pub fn remove_attr(&mut self, key: &str) {
        if let Some(i) = self.attrs.iter().position(|a| a.key == key) {
            self.attrs.remove(i);
        }
    }

    /// True if any `class` attribute lists `class` as a token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .iter()
            .filter(|a| a.key == "class")
            .any(|a| a.value.split_ascii_whitespace().any(|c| c == class))
    }

    /// Append `class` to the class list unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        match self.attrs.iter_mut().find(|a| a.key == "class") {
            Some(attr) if attr.value.trim().is_empty() => attr.value = class.to_string(),
            Some(attr) => {
                attr.value.push(' ');
                attr.value.push_str(class);
            }
            None => self.attrs.push(Attribute::new("class", class)),
        }
    }

    /// Drop `class` from the class list; the attribute goes away once empty.
    pub fn remove_class(&mut self, class: &str) {
        let Some(i) = self.attrs.iter().position(|a| a.key == "class") else {
            return;
        };
        let tokens: Vec<&str> = self.attrs[i].value.split_ascii_whitespace().collect();
        if !tokens.contains(&class) {
            return;
        }
        let kept: Vec<&str> = tokens.into_iter().filter(|t| *t != class).collect();
        if kept.is_empty() {
            self.attrs.remove(i);
        } else {
            let joined = kept.join(" ");
            self.attrs[i].value = joined;
        }
    }
}
