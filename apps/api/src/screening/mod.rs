// Screening pipeline: upload → text extraction → AI analysis → persisted
// candidate. All LLM calls go through the ai module, never directly.

pub mod extract;
pub mod handlers;
