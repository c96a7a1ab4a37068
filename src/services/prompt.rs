// src/services/prompt.rs
use crate::message::{ChatMessage, HistoryItem};

pub const SYSTEM_PROMPT: &str = "You are a virtual health assistant named Dr. CareEase, \
specializing in disability-related questions. \
Provide helpful, empathetic, and informative responses based on general medical knowledge. \
Do not provide a diagnosis, prescribe medication, or offer specific treatment plans. \
Always include a clear disclaimer at the end of your response, such as 'This information is \
for educational purposes only and is not a substitute for professional medical advice. \
Always consult a qualified healthcare provider for personalized medical decisions.'";

/// System persona, then the history in order, then the new question.
pub fn build_messages(history: Vec<HistoryItem>, question: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::new("system", SYSTEM_PROMPT));
    messages.extend(history.into_iter().map(ChatMessage::from));
    messages.push(ChatMessage::new("user", question));
    messages
}
