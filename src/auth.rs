use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

/// Environment variable consulted before stdin or the terminal.
pub const PASSWORD_ENV: &str = "BCRYPT_PASSWORD";

pub fn read_password() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  BCRYPT_PASSWORD="supersecret" bcrypt-kit hash
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(Zeroizing::new(pw));
    }

    //  stdin (Pipeline)
    //  printf "%s" "$SECRET" | bcrypt-kit verify '$2b$12$...'
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        if io::stdin().read_line(&mut buf)? == 0 {
            bail!("No password provided");
        }
        trim_newline(&mut buf);
        return Ok(buf);
    }

    //  Interactive (TTY)
    let pw = rpassword::prompt_password("Password: ")?;
    Ok(Zeroizing::new(pw))
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
