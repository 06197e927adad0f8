use chrono::{DateTime, Utc};

/// Validade do cookie: dias a partir de agora ou instante absoluto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expiry {
    Days(f64),
    At(DateTime<Utc>),
}

/// Atributos de escrita do cookie. Cada campo só entra na atribuição
/// quando presente.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
}
