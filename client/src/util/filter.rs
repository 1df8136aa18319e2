//! Local search and filter predicates over already-fetched lists.
//!
//! Filters never reorder: each returns the matching records cloned in their
//! original order, and runs synchronously on every keystroke.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{ContactRequest, ContactStatus, Quiz, Transaction, UserRecord};

/// Case-insensitive substring matcher built once per search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An empty term matches everything.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.into_iter().any(|f| f.to_lowercase().contains(&self.0))
    }
}

pub fn filter_users(users: &[UserRecord], search: &str) -> Vec<UserRecord> {
    let term = SearchTerm::new(search);
    users
        .iter()
        .filter(|u| term.matches_any([u.name.as_str(), u.email.as_str()]))
        .cloned()
        .collect()
}

/// Active-status filter on the dashboard user list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.as_str() == raw).unwrap_or_default()
    }

    pub fn accepts(self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

/// Inclusive balance bounds; either side may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BalanceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BalanceRange {
    /// Parse the two text inputs. Blank or non-numeric input leaves that side open.
    pub fn parse(min: &str, max: &str) -> Self {
        let bound = |raw: &str| raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Self { min: bound(min), max: bound(max) }
    }

    /// A missing balance counts as zero.
    pub fn contains(&self, balance: Option<f64>) -> bool {
        let value = balance.unwrap_or(0.0);
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

pub fn filter_dashboard_users(
    users: &[UserRecord],
    search: &str,
    active: ActiveFilter,
    balance: BalanceRange,
) -> Vec<UserRecord> {
    let term = SearchTerm::new(search);
    users
        .iter()
        .filter(|u| term.matches_any([u.name.as_str(), u.email.as_str()]))
        .filter(|u| active.accepts(u.active))
        .filter(|u| balance.contains(u.balance))
        .cloned()
        .collect()
}

/// Search on name, email, and subject; `status` of `None` keeps every status.
pub fn filter_contacts(contacts: &[ContactRequest], search: &str, status: Option<ContactStatus>) -> Vec<ContactRequest> {
    let term = SearchTerm::new(search);
    contacts
        .iter()
        .filter(|c| term.matches_any([c.name.as_str(), c.email.as_str(), c.subject.as_str()]))
        .filter(|c| status.map_or(true, |s| c.status == s))
        .cloned()
        .collect()
}

/// Search on title, creator name, and category.
pub fn filter_quizzes(quizzes: &[Quiz], search: &str) -> Vec<Quiz> {
    let term = SearchTerm::new(search);
    quizzes
        .iter()
        .filter(|q| {
            let creator = q.creator.as_ref().and_then(|c| c.name.as_deref()).unwrap_or("");
            term.matches_any([q.title.as_str(), creator, q.category.as_deref().unwrap_or("")])
        })
        .cloned()
        .collect()
}

/// Search on transaction type and the user's name or email.
pub fn filter_transactions(transactions: &[Transaction], search: &str) -> Vec<Transaction> {
    let term = SearchTerm::new(search);
    transactions
        .iter()
        .filter(|t| {
            let user = t.user.clone().unwrap_or_default();
            term.matches_any([
                t.kind.as_str(),
                user.name.as_deref().unwrap_or(""),
                user.email.as_deref().unwrap_or(""),
            ])
        })
        .cloned()
        .collect()
}
