use std::fmt;

/// A greeting for one person on one date, ready to be printed.
///
/// The person's name is used verbatim. It is not trimmed or validated and may be empty.
///
/// # Examples
/// ```
/// use hello_greeter::Greeting;
///
/// let greeting = Greeting::new("Brendan", "Mon Jan 01 2024");
/// assert_eq!(greeting.to_string(), "Hello Brendan, today is Mon Jan 01 2024!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    person: String,
    date_text: String,
}

impl Greeting {
    pub fn new(person: impl Into<String>, date_text: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            date_text: date_text.into(),
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello {}, today is {}!", self.person, self.date_text)
    }
}
