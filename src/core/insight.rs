//! Generated customer messages and financial tips.
//!
//! Text generation sits behind [`TextGenerator`] so no particular provider is
//! baked in. Both helpers degrade to a fixed message when generation fails.

use crate::errors::Result;
use async_trait::async_trait;
use tracing::warn;

/// Returned by [`customer_message`] when generation fails.
pub const CUSTOMER_MESSAGE_FALLBACK: &str = "Sorry, we could not create a message right now.";
/// Returned by [`financial_insight`] when generation fails.
pub const FINANCIAL_INSIGHT_FALLBACK: &str = "Financial analysis is not available right now.";

/// Produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    /// Implementations return `Error::TextGeneration` (or a transport error) when
    /// no text could be produced.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

fn customer_prompt(kind: &str, details: &str) -> String {
    format!(
        "Write a short, engaging marketing SMS for a restaurant customer.\n\
         Message type: {kind}.\n\
         Additional details: {details}.\n\
         The message should be friendly, professional and include a call to action."
    )
}

fn insight_prompt(revenue: f64, expenses: f64) -> String {
    format!(
        "Analyse the restaurant's financial position: revenue {revenue:.2}, expenses {expenses:.2}.\n\
         Give one short, focused business tip for improving profitability."
    )
}

/// A marketing message of the given `kind` (e.g. "weekend promotion").
pub async fn customer_message<G>(generator: &G, kind: &str, details: &str) -> String
where
    G: TextGenerator + ?Sized,
{
    match generator.generate(&customer_prompt(kind, details)).await {
        Ok(text) => text,
        Err(e) => {
            warn!(kind, "Customer message generation failed: {}", e);
            CUSTOMER_MESSAGE_FALLBACK.to_string()
        }
    }
}

/// One profitability tip for the given revenue and expenses.
pub async fn financial_insight<G>(generator: &G, revenue: f64, expenses: f64) -> String
where
    G: TextGenerator + ?Sized,
{
    match generator.generate(&insight_prompt(revenue, expenses)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Financial insight generation failed: {}", e);
            FINANCIAL_INSIGHT_FALLBACK.to_string()
        }
    }
}
