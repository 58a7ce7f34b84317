//! Auth0 redirect handlers

use super::select;
use crate::error::Result;
use coffee_shop_env::auth0::Auth0Client;
use coffee_shop_env::Environment;
use std::io::Write;
use tracing::debug;

/// Print the authorize URL the client redirects the browser to
pub fn handle_authorize_url(
    env: Option<Environment>,
    state: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let config = select(env);
    let client = Auth0Client::new(&config.auth0)?;

    let url = match state {
        Some(state) => client.authorize_url_with_state(state),
        None => client.authorize_url().0,
    };
    debug!("Authorize URL targets {}", client.domain());

    writeln!(out, "{url}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_redirect_with_state() {
        let mut out = Vec::new();
        handle_authorize_url(Some(Environment::Development), Some("abc"), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("https://cheermoon.auth0.com/authorize?"));
        assert!(printed.contains("state=abc"));
        assert!(printed.contains("audience=COFFEE_SHOP"));
        assert!(printed.ends_with('\n'));
    }
}
