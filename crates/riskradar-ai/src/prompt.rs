//! Prompt construction for contract risk analysis.

use riskradar_core::RegionConfig;

/// Contract text beyond this many characters is not sent to the provider.
pub const MAX_CONTRACT_CHARS: usize = 30_000;

/// Contract text cut to [`MAX_CONTRACT_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedText<'a> {
    pub body: &'a str,
    /// Character count of the full input.
    pub original_chars: usize,
}

impl TruncatedText<'_> {
    pub fn was_truncated(&self) -> bool {
        self.original_chars > MAX_CONTRACT_CHARS
    }
}

/// Cut `text` at a character boundary, never inside a multi-byte scalar.
pub fn truncate_contract(text: &str) -> TruncatedText<'_> {
    let original_chars = text.chars().count();
    let body = match text.char_indices().nth(MAX_CONTRACT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    };
    TruncatedText {
        body,
        original_chars,
    }
}

/// Build the full analysis instruction for `region`.
pub fn build_analysis_prompt(contract_text: &str, region: &RegionConfig) -> String {
    let laws = region
        .laws
        .iter()
        .map(|law| format!("- {law}"))
        .collect::<Vec<_>>()
        .join("\n");

    let contract = truncate_contract(contract_text);
    let notice = if contract.was_truncated() {
        format!(
            "\n[Contract truncated for analysis: first {MAX_CONTRACT_CHARS} of {} characters shown]",
            contract.original_chars
        )
    } else {
        String::new()
    };

    format!(
        "Role: You are a senior legal compliance AI specialised in {name} law.\n\
         Context: The user has submitted a contract for risk analysis.\n\
         \n\
         Applicable legal framework for {name}:\n\
         {laws}\n\
         \n\
         Task:\n\
         Analyse the following contract strictly against {name} law.\n\
         Identify red flags, critical omissions (such as missing data protection clauses \
         required by local law), and unfair terms.\n\
         Assign a risk score from 0 (safe) to 100 (extremely risky).\n\
         \n\
         Contract text:\n\
         \"\"\"\n\
         {body}\n\
         \"\"\"{notice}\n\
         \n\
         Output format:\n\
         Return strictly JSON matching the specified schema.",
        name = region.name,
        laws = laws,
        body = contract.body,
        notice = notice,
    )
}
