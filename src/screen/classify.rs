//! Single-stock vs fund-like classification.
//!
//! A best-effort heuristic, not a taxonomy: a symbol whitelist that
//! short-circuits everything else, then a substring scan over the space-padded
//! issuer name. False positives and negatives are expected and acceptable.
//! Both lists are plain data so tuning them needs no code changes.

/// Tickers kept even though their issuer name would otherwise match a fundish
/// pattern (broad-market trackers intentionally retained for comparison).
pub static SYMBOL_WHITELIST: &[&str] = &["SPY", "QQQ", "USO", "LQD"];

/// Issuer-name substrings that mark fund-like or structured products.
///
/// Matched against the lowercased company name padded with one leading and one
/// trailing space, so entries like ` lp ` respect word-ish boundaries.
pub static FUNDISH_SUBSTRINGS: &[&str] = &[
    // Common ETF/ETN fund families
    "etf", "etn", "spdr", "ishares", "vanguard", "invesco", "proshares",
    "global x", "direxion", "wisdomtree", "xtrackers", "vaneck", "pacer",
    "ark", "first trust", "schwab", "select sector", "index",
    // Generic fund terms
    "fund", "trust unit", "unit investment trust", "closed end", "open end",
    // Wealth/private equity terms
    "private equity", "wealth fund", "family office", "sovereign wealth",
    // Bond/fixed income keywords (excludes bond funds/ETFs/notes)
    "bond", "treasury", "muni", "municipal", "note", "preferred", "fixed income",
    // Other structures that are not single operating companies
    "depositary receipt", "adr", "ads", "unit trust", "capital trust",
    "income trust", "reit", "real estate", "partnership", " lp ", " llp ",
    " mlp ", " etp ",
];

/// Decide whether a record looks like a single operating company.
///
/// The symbol is uppercased and trimmed; whitelist membership returns `true`
/// immediately. Otherwise the company name is lowercased, padded with spaces,
/// and scanned: the record is a single stock only if no fundish substring
/// occurs. Missing values are treated as empty strings and never panic.
pub fn is_single_stock(symbol: Option<&str>, company: Option<&str>) -> bool {
    let symbol = symbol.unwrap_or("").trim().to_uppercase();
    if SYMBOL_WHITELIST.contains(&symbol.as_str()) {
        return true;
    }

    let padded = format!(" {} ", company.unwrap_or("").to_lowercase());
    !FUNDISH_SUBSTRINGS.iter().any(|term| padded.contains(term))
}
