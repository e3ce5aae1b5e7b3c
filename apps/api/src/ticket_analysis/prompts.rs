// Ticket analysis prompt constants.
// Literal braces in the schema skeleton are single braces; only `{subject}`
// and `{description}` are placeholders.

/// System turn for ticket analysis. Constant, never parameterized.
pub const TICKET_ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a professional support ticket analyzer. Your role is to analyze support tickets and provide structured insights WITHOUT hallucinating or making assumptions beyond what is explicitly stated in the ticket.

IMPORTANT RULES:
1. Only analyze what is explicitly written in the ticket
2. Do NOT invent information or make assumptions about missing data
3. Do NOT categorize based on assumptions - suggest categories based ONLY on what's mentioned
4. Provide factual analysis based solely on the ticket content
5. Be conservative in your assessments

Respond with a JSON object containing your analysis."#;

/// Ticket analysis prompt template. Replace `{subject}` and `{description}` before sending.
pub const TICKET_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following support ticket and provide insights in JSON format.

TICKET SUBJECT: {subject}

TICKET DESCRIPTION:
{description}

Provide a JSON response with the following structure (ONLY include these fields):
{
    "summary": "A concise 2-3 sentence summary of the ticket issue (based ONLY on what's stated)",
    "possible_categories": [
        {
            "category": "Category name",
            "confidence": "high/medium/low",
            "reason": "Why this category based on ticket content"
        }
    ],
    "possible_automations": [
        {
            "automation": "What could be automated",
            "description": "How it would work",
            "feasibility": "high/medium/low"
        }
    ],
    "user_sentiment": {
        "overall_feeling": "positive/neutral/negative/frustrated/urgent",
        "indicators": ["List of text indicators that suggest this feeling"],
        "urgency_level": "low/medium/high/critical"
    }
}

IMPORTANT:
- summary: Extract only what's explicitly mentioned, don't infer additional problems
- possible_categories: Only suggest categories that are clearly hinted at or mentioned in the ticket
- possible_automations: Suggest automations that would directly solve or help with the stated issue
- user_sentiment: Analyze tone and language - look for keywords indicating emotion, frustration, politeness, etc.
- confidence/feasibility: Be conservative - use "low" if not clear"#;

/// Placeholder names `TICKET_ANALYSIS_PROMPT_TEMPLATE` expects, each exactly once.
pub const TICKET_ANALYSIS_PLACEHOLDERS: &[&str] = &["subject", "description"];
