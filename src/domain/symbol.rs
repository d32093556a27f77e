
/// A market-data ticker such as `DOGE-USD`.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct MarketSymbol {
    pub name: String,
}

impl MarketSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_uppercase(),
        }
    }

    // Finds the quote currency after the final '-' (e.g. "USD" in "DOGE-USD").
    // Returns None for bare tickers such as "AAPL".
    pub fn get_quote(text: &str) -> Option<&str> {
        text.rsplit_once('-')
            .map(|(_, quote)| quote)
            .filter(|quote| !quote.is_empty())
    }

    pub fn get_base(text: &str) -> &str {
        match text.rsplit_once('-') {
            Some((base, _)) if !base.is_empty() => base,
            _ => text,
        }
    }

    /// Short asset name used on the chart ("DOGE")
    pub fn base(&self) -> &str {
        Self::get_base(&self.name)
    }

    pub fn quote(&self) -> Option<&str> {
        Self::get_quote(&self.name)
    }

    // The name we pass into the chart API (URL path segment)
    pub fn api_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for MarketSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_and_quote_split() {
        let symbol = MarketSymbol::new(" doge-usd ");
        assert_eq!(symbol.api_name(), "DOGE-USD");
        assert_eq!(symbol.base(), "DOGE");
        assert_eq!(symbol.quote(), Some("USD"));
    }

    #[test]
    fn test_bare_ticker_has_no_quote() {
        let symbol = MarketSymbol::new("AAPL");
        assert_eq!(symbol.base(), "AAPL");
        assert_eq!(symbol.quote(), None);
        assert_eq!(MarketSymbol::get_base("-USD"), "-USD");
    }
}
