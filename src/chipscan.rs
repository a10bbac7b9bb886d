use {
    crate::utils::*,
    lazy_static::lazy_static,
    memchr::memmem::Finder,
};

lazy_static! {
    //built once, searched on every scan
    static ref TOKEN_FINDERS: Vec<(&'static str, Finder<'static>)> = CHIP_TOKENS
        .iter()
        .map(|&token| (token, Finder::new(token.as_bytes())))
        .collect();
}

//first occurrence of every known chip token, in table order,
//tokens are matched independently so nested hits report twice
#[must_use]
pub fn scan_tokens(data: &[u8]) -> Vec<(&'static str, usize)> {
    TOKEN_FINDERS
        .iter()
        .filter_map(|(token, finder)| finder.find(data).map(|off| (*token, off)))
        .collect()
}

//look for anything hinting at JL7018F / Allwinner V821L2 or related strings.
//This is a simple heuristic scanner, not a full strings(1) implementation.
pub fn scan(path: &str, max_bytes: usize) {
    let data = match read_head(path, max_bytes) {
        Ok(data) => data,
        Err(e) => {
            println!("{} Failed to read {path}: {e}", "[!]".red());
            return;
        }
    };

    println!("\n{} Chip-related string scan (first ~2MB):", "[+]".green());
    let found = scan_tokens(&data);
    if found.is_empty() {
        println!("    (no obvious JL/Allwinner markers in first chunk)");
    } else {
        for (token, off) in found {
            println!("    - Found {token} at offset {off:#x}");
        }
    }
}
