use std::sync::Arc;

use tracing::debug;

use webstash_common::{Clock, MS_PER_DAY, SystemClock};

use crate::date::format_http_date;
use crate::options::{CookieOptions, Expiry};
use crate::source::CookieSource;

/// Adapter de cookies sobre uma fonte ambiente.
///
/// Nenhum estado fica em memória entre chamadas: cada operação lê ou
/// escreve a string de cookies do host na hora.
pub struct CookieJar {
    source: Arc<dyn CookieSource>,
    clock: Arc<dyn Clock>,
}

impl CookieJar {
    pub fn new(source: Arc<dyn CookieSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock))
    }

    pub fn with_clock(source: Arc<dyn CookieSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Valor decodificado do primeiro par cujo nome bate exato.
    /// Sem par correspondente, ou valor indecodificável, vira `None`.
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = self.source.read();
        for pair in raw.split(';') {
            let pair = pair.trim_start_matches(' ');
            if let Some(value) = pair.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
                return urlencoding::decode(value).ok().map(|v| v.into_owned());
            }
        }
        None
    }

    /// Grava `nome=valor` percent-encodados, com os atributos presentes
    /// nas opções. O host mescla a atribuição por nome/path/domain.
    pub fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        let mut cookie = format!(
            "{}={}",
            urlencoding::encode(name),
            urlencoding::encode(value)
        );
        if let Some(at_ms) = self.expiry_ms(options.expires) {
            cookie.push_str("; expires=");
            cookie.push_str(&format_http_date(at_ms));
        }
        if let Some(path) = &options.path {
            cookie.push_str("; path=");
            cookie.push_str(path);
        }
        if let Some(domain) = &options.domain {
            cookie.push_str("; domain=");
            cookie.push_str(domain);
        }
        if options.secure {
            cookie.push_str("; secure");
        }
        debug!("cookie gravado: {name}");
        self.source.write(&cookie);
    }

    /// Remove escrevendo valor vazio com expiração na época, no path raiz.
    pub fn delete(&self, name: &str) {
        let cookie = format!(
            "{}=; expires={}; path=/",
            urlencoding::encode(name),
            format_http_date(0)
        );
        self.source.write(&cookie);
    }

    /// Dias viram instante absoluto pelo clock; zero dias é tratado como
    /// ausência de prazo (truthiness do formato original).
    fn expiry_ms(&self, expiry: Option<Expiry>) -> Option<i64> {
        match expiry? {
            Expiry::Days(days) if days != 0.0 => {
                Some(self.clock.now_ms() + (days * MS_PER_DAY as f64) as i64)
            }
            Expiry::Days(_) => None,
            Expiry::At(at) => Some(at.timestamp_millis()),
        }
    }
}
