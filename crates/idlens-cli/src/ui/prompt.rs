use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line. A closed stdin is an error,
/// not an empty answer, so interactive loops terminate instead of
/// spinning.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().lock().read_line(&mut input)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(input.trim().to_string())
}

pub fn confirm(prompt: &str) -> io::Result<bool> {
    Ok(read_line(prompt)?.eq_ignore_ascii_case("y"))
}
