//! Command-line option handling.

/// Parsed program options.
#[derive(Debug, Default)]
pub struct Options {
    pub rom_file: Option<String>,
    pub sna_file: Option<String>,
    pub z80_file: Option<String>,
    pub break_addr: Option<u16>,
    pub debug_mode: bool,
    pub fast_mode: bool,
    pub pause_on_quit: bool,
}

pub fn print_help(program: &str) {
    println!(
        "Run: {} [--help] [--debug] [--fast] [--pause] [--rom <file>] [--sna <file>] [--z80 <file>] [--break <addr>]",
        program
    );
    println!("\t--help           - displays this help");
    println!("\t--rom <file>     - loads the specified ROM file (at address 0)");
    println!("\t--sna <file>     - loads the specified SNA snapshot into memory");
    println!("\t--z80 <file>     - loads the specified Z80 snapshot into memory");
    println!("\t--debug          - switches on per-instruction debug output");
    println!("\t--break <addr>   - enables a breakpoint at the specified address");
    println!("\t--fast           - ignores instruction timings and runs flat out");
    println!("\t--pause          - keeps the window open after emulation stops");
}

impl Options {
    /// Parses the argument list (without the program name). `Ok(None)` means
    /// help was requested and printed.
    pub fn parse(program: &str, args: &[String]) -> Result<Option<Options>, String> {
        let mut options = Options::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_help(program);
                    return Ok(None);
                }
                "--debug" | "-d" => options.debug_mode = true,
                "--fast" | "-f" => options.fast_mode = true,
                "--pause" | "-p" => options.pause_on_quit = true,
                "--rom" | "-r" => {
                    options.rom_file =
                        Some(iter.next().ok_or("--rom needs a file name")?.clone());
                }
                "--sna" | "-s" => {
                    options.sna_file =
                        Some(iter.next().ok_or("--sna needs a file name")?.clone());
                }
                "--z80" | "-z" => {
                    options.z80_file =
                        Some(iter.next().ok_or("--z80 needs a file name")?.clone());
                }
                "--break" | "-b" => {
                    let word = iter.next().ok_or("--break needs an address")?;
                    let addr = parse_addr(word)
                        .ok_or_else(|| format!("break address '{}' is not a 16-bit value", word))?;
                    options.break_addr = Some(addr);
                }
                other => return Err(format!("unrecognised flag '{}'", other)),
            }
        }

        Ok(Some(options))
    }
}

fn parse_addr(word: &str) -> Option<u16> {
    if let Some(hex) = word.strip_prefix("0x") {
        u16::from_str_radix(hex, 16).ok()
    } else {
        word.parse::<u16>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_the_full_surface() {
        let opts = Options::parse(
            "speccy",
            &args(&["--rom", "48.rom", "--break", "0x1234", "--debug", "--fast"]),
        )
        .unwrap()
        .unwrap();

        assert_eq!(opts.rom_file.as_deref(), Some("48.rom"));
        assert_eq!(opts.break_addr, Some(0x1234));
        assert!(opts.debug_mode);
        assert!(opts.fast_mode);
        assert!(!opts.pause_on_quit);
    }

    #[test]
    fn rejects_unknown_flags_and_bad_addresses() {
        assert!(Options::parse("speccy", &args(&["--wibble"])).is_err());
        assert!(Options::parse("speccy", &args(&["--break", "0x12345"])).is_err());
        assert!(Options::parse("speccy", &args(&["--rom"])).is_err());
    }

    #[test]
    fn help_short_circuits() {
        let parsed = Options::parse("speccy", &args(&["--help"])).unwrap();
        assert!(parsed.is_none());
    }
}
