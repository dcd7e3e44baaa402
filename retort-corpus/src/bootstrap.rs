//! Default corpus written when no backing store exists.

/// Three canned entries: capabilities, mechanism, origin.
pub const DEFAULT_CORPUS: &str = "\
QUESTION: What can you help me with?
ANSWER: I'm a chatbot designed to answer questions based on my knowledge base. You can ask me questions about various topics and I'll try to provide relevant information.
TAGS: help, introduction, capabilities
---
QUESTION: How do you work?
ANSWER: I process your questions using natural language processing techniques and match them against my knowledge base to find the most relevant answers. I also maintain some context from our conversation to provide more coherent responses.
TAGS: functionality, explanation, system
---
QUESTION: Who created you?
ANSWER: I was created as a knowledge-base answering service that matches natural language questions against a curated set of question and answer entries.
TAGS: creator, origin, development
";
