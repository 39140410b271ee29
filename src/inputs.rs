//! Strongly-typed inputs for the catalog templates.
//!
//! One struct per template, fields matching the template's required
//! variables. Building the rendering context from a typed struct rules out
//! missing or misspelled variables at compile time; the string-keyed
//! [`Template::render`](crate::template::Template::render) path stays
//! available for callers that address templates dynamically.
//!
//! Also provides the two assembly helpers the agent loop needs before
//! rendering: formatting the available-action list for `analyze_task` and
//! the incomplete-task queue for `create_tasks`.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::catalog;
use crate::error::Result;
use crate::template::{Template, vars};

/// A typed rendering context tied to one catalog template.
pub trait PromptInput {
    /// The template this input renders.
    fn template(&self) -> &'static Template;

    /// The input's fields as a name-to-value context.
    fn variables(&self) -> HashMap<String, String>;

    /// Render the template with this input.
    fn render(&self) -> Result<String> {
        self.template().render(&self.variables())
    }
}

/// Input for [`catalog::START_GOAL`]: decompose a goal into steps.
#[derive(Debug, Clone, Serialize)]
pub struct StartGoal<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// Language the model must answer in.
    pub language: &'a str,
}

impl PromptInput for StartGoal<'_> {
    fn template(&self) -> &'static Template {
        &catalog::START_GOAL
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([("goal", self.goal), ("language", self.language)])
    }
}

/// Input for [`catalog::ANALYZE_TASK`]: pick an action for a task.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeTask<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// The task being analyzed.
    pub task: &'a str,
    /// The action list the model must choose from, see [`tools_overview`].
    pub tools_overview: &'a str,
    /// Language for the `reasoning` field of the reply.
    pub language: &'a str,
}

impl PromptInput for AnalyzeTask<'_> {
    fn template(&self) -> &'static Template {
        &catalog::ANALYZE_TASK
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([
            ("goal", self.goal),
            ("task", self.task),
            ("tools_overview", self.tools_overview),
            ("language", self.language),
        ])
    }
}

/// Input for [`catalog::CODE`]: produce a markdown code solution.
#[derive(Debug, Clone, Serialize)]
pub struct Code<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// Language for explanations and comments; code stays English.
    pub language: &'a str,
    /// What the code must accomplish.
    pub task: &'a str,
}

impl PromptInput for Code<'_> {
    fn template(&self) -> &'static Template {
        &catalog::CODE
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([
            ("goal", self.goal),
            ("language", self.language),
            ("task", self.task),
        ])
    }
}

/// Input for [`catalog::EXECUTE_TASK`]: answer a sub-task as free text.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteTask<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// Language the model must answer in.
    pub language: &'a str,
    /// The sub-task to perform.
    pub task: &'a str,
}

impl PromptInput for ExecuteTask<'_> {
    fn template(&self) -> &'static Template {
        &catalog::EXECUTE_TASK
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([
            ("goal", self.goal),
            ("language", self.language),
            ("task", self.task),
        ])
    }
}

/// Input for [`catalog::CREATE_TASKS`]: propose at most one follow-up task.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTasks<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// Language the model must answer in.
    pub language: &'a str,
    /// The incomplete task queue, see [`task_list`].
    pub tasks: &'a str,
    /// The task that just ran.
    #[serde(rename = "lastTask")]
    pub last_task: &'a str,
    /// The result of that task.
    pub result: &'a str,
}

impl PromptInput for CreateTasks<'_> {
    fn template(&self) -> &'static Template {
        &catalog::CREATE_TASKS
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([
            ("goal", self.goal),
            ("language", self.language),
            ("tasks", self.tasks),
            ("lastTask", self.last_task),
            ("result", self.result),
        ])
    }
}

/// Input for [`catalog::SUMMARIZE`]: summarize snippets with citations.
#[derive(Debug, Clone, Serialize)]
pub struct Summarize<'a> {
    /// The user's overall objective.
    pub goal: &'a str,
    /// Language the model must answer in.
    pub language: &'a str,
    /// The query the summary should answer.
    pub query: &'a str,
    /// The source snippets to summarize.
    pub snippets: &'a str,
}

impl PromptInput for Summarize<'_> {
    fn template(&self) -> &'static Template {
        &catalog::SUMMARIZE
    }

    fn variables(&self) -> HashMap<String, String> {
        vars([
            ("goal", self.goal),
            ("language", self.language),
            ("query", self.query),
            ("snippets", self.snippets),
        ])
    }
}

/// The answer language for a prompt. Defaults to English, matching the
/// product default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language(pub String);

impl Language {
    /// The language as a plain string slice for a typed input field.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Language("English".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Language(value.to_string())
    }
}

/// One available action, as shown to the model in `analyze_task`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescription<'a> {
    /// One-word action name the model must reply with.
    pub name: &'a str,
    /// What the action does, one line.
    pub description: &'a str,
}

/// Format the available actions for the `tools_overview` variable, one
/// `name: description` line per action.
pub fn tools_overview(tools: &[ToolDescription<'_>]) -> String {
    tools
        .iter()
        .map(|tool| format!("{}: {}", tool.name, tool.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the incomplete task queue for the `tasks` variable as a JSON
/// array of strings.
pub fn task_list<S: AsRef<str>>(tasks: &[S]) -> String {
    let items = tasks
        .iter()
        .map(|task| serde_json::Value::String(task.as_ref().to_string()))
        .collect();
    serde_json::Value::Array(items).to_string()
}
