use clap::ValueEnum;
use idlens_client::QueryKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SearchKind {
    Username,
    Email,
    Phone,
    Person,
    Crypto,
}

impl SearchKind {
    /// The wire value the API expects; a person search goes out as `name`.
    pub fn query_kind(&self) -> QueryKind {
        match self {
            SearchKind::Username => QueryKind::Username,
            SearchKind::Email => QueryKind::Email,
            SearchKind::Phone => QueryKind::Phone,
            SearchKind::Person => QueryKind::Name,
            SearchKind::Crypto => QueryKind::Crypto,
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            SearchKind::Username => "👤 Username",
            SearchKind::Email => "📧 Email",
            SearchKind::Phone => "📱 Phone",
            SearchKind::Person => "👥 Person",
            SearchKind::Crypto => "💰 Crypto Wallet",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Username => write!(f, "username"),
            SearchKind::Email => write!(f, "email"),
            SearchKind::Phone => write!(f, "phone"),
            SearchKind::Person => write!(f, "person"),
            SearchKind::Crypto => write!(f, "crypto"),
        }
    }
}
