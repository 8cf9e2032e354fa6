//! LanguageTool HTTP API engine (`POST /v2/check`).
//!
//! The annotated text goes in the `data` form field, so reported offsets refer to the
//! full text including markup, i.e. to positions in the original document.

use serde::Deserialize;

use super::{CheckError, CheckRequest, GrammarEngine, RuleMatch};

pub struct LanguageTool {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl LanguageTool {
    /// Engine for the server at `server`, e.g. `http://localhost:8081`.
    ///
    /// Requests wait for the server however long a check takes.
    pub fn new(server: &str) -> Result<Self, CheckError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("languagetool-asciidoc/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()?;
        Ok(Self {
            client,
            endpoint: check_endpoint(server),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GrammarEngine for LanguageTool {
    fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<RuleMatch>, CheckError> {
        let form = form_params(request)?;
        log::debug!(
            "Checking {} byte(s) in {} with {}",
            request.text.len(),
            request.language,
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).form(&form).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(CheckError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

fn check_endpoint(server: &str) -> String {
    format!("{}/v2/check", server.trim_end_matches('/'))
}

fn form_params(request: &CheckRequest<'_>) -> Result<Vec<(&'static str, String)>, CheckError> {
    let mut form = vec![
        ("language", request.language.to_string()),
        ("data", request.text.to_json()?),
    ];
    if !request.disabled_rules.is_empty() {
        let disabled: Vec<&str> = request.disabled_rules.iter().map(String::as_str).collect();
        form.push(("disabledRules", disabled.join(",")));
    }
    if !request.enabled_rules.is_empty() {
        form.push(("enabledRules", request.enabled_rules.join(",")));
    }
    if let Some(mother_tongue) = request.mother_tongue {
        form.push(("motherTongue", mother_tongue.to_string()));
    }
    Ok(form)
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    message: String,
    #[serde(default)]
    replacements: Vec<ApiReplacement>,
    offset: usize,
    length: usize,
    rule: ApiRule,
}

#[derive(Debug, Deserialize)]
struct ApiReplacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ApiRule {
    id: String,
}

fn parse_response(body: &str) -> Result<Vec<RuleMatch>, CheckError> {
    let response: CheckResponse = serde_json::from_str(body)?;
    Ok(response
        .matches
        .into_iter()
        .map(|m| RuleMatch {
            from_offset: m.offset,
            to_offset: m.offset + m.length,
            message: m.message,
            suggested_replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            rule_id: m.rule.id,
        })
        .collect())
}
