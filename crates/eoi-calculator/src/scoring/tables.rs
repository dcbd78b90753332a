use super::questions::QuestionId;

/// One permitted option of a single-choice question and the points it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceRule<T: 'static> {
    pub choice: T,
    pub key: &'static str,
    pub label: &'static str,
    pub points: u8,
}

/// Ordered points table for a single-choice question. Rule order is display order.
#[derive(Debug)]
pub struct ChoiceTable<T: 'static> {
    pub question: QuestionId,
    pub rules: &'static [ChoiceRule<T>],
}

impl<T> ChoiceTable<T>
where
    T: Copy + PartialEq + 'static,
{
    pub fn rule(&self, choice: T) -> Option<&'static ChoiceRule<T>> {
        self.rules.iter().find(|rule| rule.choice == choice)
    }

    pub fn points(&self, choice: T) -> u8 {
        self.rule(choice).map_or(0, |rule| rule.points)
    }

    pub fn label(&self, choice: T) -> &'static str {
        self.rule(choice).map_or("", |rule| rule.label)
    }

    pub fn key(&self, choice: T) -> &'static str {
        self.rule(choice).map_or("", |rule| rule.key)
    }

    /// Matches a submitted form key. Surrounding whitespace is ignored.
    pub fn parse(&self, key: &str) -> Option<T> {
        let key = key.trim();
        self.rules
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.choice)
    }

    pub fn first(&self) -> Option<T> {
        self.rules.first().map(|rule| rule.choice)
    }

    /// Lowest-scoring option; ties resolve to the earliest listed rule.
    pub fn lowest(&self) -> Option<T> {
        self.rules
            .iter()
            .fold(None::<&ChoiceRule<T>>, |lowest, rule| match lowest {
                Some(current) if current.points <= rule.points => Some(current),
                _ => Some(rule),
            })
            .map(|rule| rule.choice)
    }

    pub fn maximum(&self) -> u8 {
        self.rules.iter().map(|rule| rule.points).max().unwrap_or(0)
    }
}

/// Flat award granted when a checkbox question is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusRule {
    pub question: QuestionId,
    pub points: u8,
}

impl BonusRule {
    pub fn points(&self, checked: bool) -> u8 {
        if checked {
            self.points
        } else {
            0
        }
    }
}
