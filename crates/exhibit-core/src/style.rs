/// Ordered list of inline CSS declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.set(prop, value);
        self
    }

    /// Replace `prop` in place if present, else append it.
    pub fn set(&mut self, prop: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((prop, value)),
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Serialize for a `style` attribute.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, (prop, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(prop);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}
