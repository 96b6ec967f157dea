use serde::Serialize;

/// An NSE listing the stock forecast backend has a model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockListing {
    /// Symbol exactly as the backend expects it (case matters there).
    pub symbol: &'static str,
    pub label: &'static str,
}

const fn listing(symbol: &'static str, label: &'static str) -> StockListing {
    StockListing { symbol, label }
}

pub const DEFAULT_SYMBOL: &str = "SBIN";

pub const STOCK_CATALOG: &[StockListing] = &[
    listing("ABB", "ABB India"),
    listing("ADANIPORTS", "Adani Ports"),
    listing("APOLLOHOSP", "Apollo Hospitals"),
    listing("ASIANPAINT", "Asian Paints"),
    listing("AUROPHARMA", "Aurobindo Pharma"),
    listing("axisbank", "Axis Bank"),
    listing("BAJAJ-AUTO", "Bajaj Auto"),
    listing("BAJAJFINSV", "Bajaj Finserv"),
    listing("BAJFINANCE", "Bajaj Finance"),
    listing("BALKRISIND", "Balkrishna Industries"),
    listing("BANKBARODA", "Bank of Baroda"),
    listing("BERGEPAINT", "Berger Paints"),
    listing("BHARTIARTL", "Bharti Airtel"),
    listing("BIOCON", "Biocon"),
    listing("BOSCHLTD", "Bosch"),
    listing("BPCL", "Bharat Petroleum (BPCL)"),
    listing("BRITIANNIA", "Britannia Industries"),
    listing("CANBK", "Canara Bank"),
    listing("CIPLA", "Cipla"),
    listing("COALINDIA", "Coal India"),
    listing("CONCOR", "Container Corporation (CONCOR)"),
    listing("DIVISLAB", "Divi's Laboratories"),
    listing("DLF", "DLF Limited"),
    listing("DRREDDY", "Dr. Reddy's Laboratories"),
    listing("EICHERMOT", "Eicher Motors"),
    listing("EXIDEIND", "Exide Industries"),
    listing("GAIL", "GAIL India"),
    listing("GODREJCP", "Godrej Consumer Products"),
    listing("GODREJPROP", "Godrej Properties"),
    listing("HAVELLS", "Havells India"),
    listing("HCLTECH", "HCL Technologies"),
    listing("HDFCBANK", "HDFC Bank"),
    listing("HDFCLIFE", "HDFC Life Insurance"),
    listing("HINDALCO", "Hindalco Industries"),
    listing("HINDUNILVR", "Hindustan Unilever (HUL)"),
    listing("ICICIBANK", "ICICI Bank"),
    listing("ICICIG", "ICICI General Insurance"),
    listing("IDBI", "IDBI Bank"),
    listing("IDFCFIRSTB", "IDFC First Bank"),
    listing("INDHOTEL", "Indian Hotels Company"),
    listing("INDIGO", "InterGlobe Aviation (IndiGo)"),
    listing("INDUSINDBK", "IndusInd Bank"),
    listing("INFY", "Infosys"),
    listing("ITC", "ITC Limited"),
    listing("KOTAKBANK", "Kotak Mahindra Bank"),
    listing("LT", "Larsen & Toubro (L&T)"),
    listing("LUPIN", "Lupin Limited"),
    listing("MAHINDRA", "Mahindra & Mahindra"),
    listing("MANAPPURAM", "Manappuram Finance"),
    listing("MARUTI", "Maruti Suzuki"),
    listing("MFSL", "Max Financial Services"),
    listing("NESTLEIND", "Nestle India"),
    listing("NTPC", "NTPC Limited"),
    listing("ONGC", "Oil and Natural Gas Corp (ONGC)"),
    listing("PEL", "Piramal Enterprises"),
    listing("PIDILITIND", "Pidilite Industries"),
    listing("PNB", "Punjab National Bank (PNB)"),
    listing("POWERGRID", "Power Grid Corporation"),
    listing("reliance", "Reliance Industries"),
    listing("SBILIFE", "SBI Life Insurance"),
    listing("SBIN", "State Bank of India (SBI)"),
    listing("SEIMENS", "Siemens India"),
    listing("SHREECEM", "Shree Cement"),
    listing("SUNPHARMA", "Sun Pharmaceutical"),
    listing("TATAMOTORS", "Tata Motors"),
    listing("TATASTEEL", "Tata Steel"),
    listing("TCS", "Tata Consultancy Services (TCS)"),
    listing("TECH_MAHINDRA", "Tech Mahindra"),
    listing("TITAN", "Titan Company"),
    listing("TORNTPHARM", "Torrent Pharmaceuticals"),
    listing("ULTRACEMCO", "UltraTech Cement"),
    listing("VOLTAS", "Voltas Ltd"),
    listing("WIPRO", "Wipro"),
];

/// Case-insensitive lookup returning the backend's canonical spelling.
pub fn resolve_symbol(input: &str) -> Option<&'static StockListing> {
    let wanted = input.trim();
    STOCK_CATALOG
        .iter()
        .find(|l| l.symbol.eq_ignore_ascii_case(wanted))
}
