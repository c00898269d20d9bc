//! Interactive prompts for the demo binary.
//!
//! Generic over reader and writer so the parsing can be tested without a
//! terminal.

use std::io::{self, BufRead, Write};

/// Print `label` and read one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Ask for the recipient address and the amount of lamports to send.
pub fn prompt_transfer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(String, u64)> {
    let recipient = prompt_line(input, output, "\nAddress to send SOL to: ")?;
    let amount = prompt_line(input, output, "Amount of lamports to send: ")?;
    let lamports = amount.parse::<u64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a lamport amount: {}", amount, e),
        )
    })?;
    Ok((recipient, lamports))
}
