//! The built-in prompt catalog.
//!
//! Six templates drive the agent loop: decompose a goal into steps, pick an
//! action for a task, write code, execute a task as free text, propose
//! follow-up tasks, and summarize search snippets with citations. Bodies are
//! product-owned prompt text and must not be reworded; tests pin the
//! instruction strings the downstream response parsers rely on.
//!
//! Every template is a `static` initialized at compile time; the catalog is
//! read-only for the life of the process.

use crate::template::Template;

/// Decompose a goal into at most 4 step descriptions (JSON array of strings).
pub static START_GOAL: Template = Template::new(
    "start_goal",
    "You are a task creation AI called AgentGPT. You answer in the
    \"{language}\" language. You are not a part of any system or device. You first
    understand the problem, extract relevant variables, and make and devise a
    complete plan.\n\n You have the following objective \"{goal}\". Create a list of step
    by step actions to accomplish the goal. Use at most 4 steps.

    Return the response as a formatted array of strings that can be used in JSON.parse()

    Examples:
    [\"Search the web for NBA news relating to Stephen Curry\", \"Write a report on the financial state of Nike\"]
    [\"Create a function to add a new vertex with a specified weight to the digraph.\"]
    [\"Search for any additional information on Bertie W.\", \"Research the best kentucky fried Chicken recipe\"]
    ",
    &["goal", "language"],
);

/// Choose one action from the supplied list, with reasoning and an argument
/// (JSON object with keys reasoning/action/arg).
pub static ANALYZE_TASK: Template = Template::new(
    "analyze_task",
    "
    High level objective: \"{goal}\"
    Current task: \"{task}\"

    Based on this information, you will perform the task by understanding the
    problem, extracting variables, and being smart and efficient. You provide concrete
    reasoning for your actions detailing your overall plan and any concerns you may
    have. Your reasoning should be no more than three sentences.
    You evaluate the best action to take strictly from the list of actions
    below:

    {tools_overview}

    Actions are the one word actions above.
    You cannot pick an action outside of this list.
    Return your response in an object of the form\n\n
    Ensure \"reasoning\" and only \"reasoning\" is in the {language} language.

    {{
        \"reasoning\": \"string\",
        \"action\": \"string\",
        \"arg\": \"string\"
    }}

    that can be used in JSON.parse() and NOTHING ELSE.
    ",
    &["goal", "task", "tools_overview", "language"],
);

/// Produce a markdown code solution: English code, localized comments.
pub static CODE: Template = Template::new(
    "code",
    "
    You are a world-class software engineer and an expert in all programing languages,
    software systems, and architecture.

    For reference, your high level goal is {goal}

    Write code in English but explanations/comments in the \"{language}\" language.
   \x20
    Provide no information about who you are and focus on writing code.
    Ensure code is bug and error free and explain complex concepts through comments
    Respond in well-formatted markdown. Ensure code blocks are used for code sections.
    Approach problems step by step and file by file, for each section, use a heading to describe the section.

    Write code to accomplish the following:
    {task}
    ",
    &["goal", "language", "task"],
);

/// Produce a free-text descriptive answer for a sub-task.
pub static EXECUTE_TASK: Template = Template::new(
    "execute_task",
    "Answer in the \"{language}\" language. Given
    the following overall objective `{goal}` and the following sub-task, `{task}`.

    Perform the task by understanding the problem, extracting variables, and being smart
    and efficient. Provide a descriptive response, make decisions yourself when
    confronted with choices and provide reasoning for ideas / decisions.
    ",
    &["goal", "language", "task"],
);

/// Propose at most one new follow-up task, or none (JSON array of 0 or 1
/// strings).
pub static CREATE_TASKS: Template = Template::new(
    "create_tasks",
    "You are an AI task creation agent. You must answer in the \"{language}\"
    language. You have the following objective `{goal}`. You have the
    following incomplete tasks `{tasks}` and have just executed the following task
    `{lastTask}` and received the following result `{result}`.

    Based on this, create at most a SINGLE new task to be completed by your AI system
    ONLY IF NEEDED such that your goal is more closely reached or completely reached.
    Ensure the task is simple and can be completed in a single step.

    Return the response as a formatted array of strings that can be used in JSON.parse()
    If no new or further tasks are needed, return [] and nothing else

    Examples:
    [\"Search the web for NBA news\"]
    [\"Create a function to add a new vertex with a specified weight to the digraph.\"]
    [\"Search for any additional information on Bertie W.\"]
    []
    ",
    &["goal", "language", "tasks", "lastTask", "result"],
);

/// Summarize snippets as markdown with inline citation links, no trailing
/// bibliography.
pub static SUMMARIZE: Template = Template::new(
    "summarize",
    "You must answer in the \"{language}\" language.\x20
   \x20
    Parse and summarize the following text snippets \"{snippets}\".
    Write using clear markdown formatting in a style expected of the goal \"{goal}\".
    Be as clear, informative, and descriptive as necessary and attempt to
    answer the query: \"{query}\" as best as possible.
   \x20
    Cite sources for as many sentences as possible via the source link. Use the index as the citation text.
    Site the source using a markdown link directly at the end of the sentence that the source is used in.\x20
    Do not list sources at the end of the writing.\x20
   \x20
    Example: \"So this is a cited sentence at the end of a paragraph[1](https://test.com). This is another sentence.\"\x20
    ",
    &["goal", "language", "query", "snippets"],
);

/// All catalog templates, in agent-loop order.
pub fn all() -> [&'static Template; 6] {
    [
        &START_GOAL,
        &ANALYZE_TASK,
        &CODE,
        &EXECUTE_TASK,
        &CREATE_TASKS,
        &SUMMARIZE,
    ]
}

/// Look up a catalog template by name.
pub fn find(name: &str) -> Option<&'static Template> {
    all().into_iter().find(|template| template.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::template::vars;
    use std::collections::BTreeSet;

    /// Declared variables equal the placeholders the body references, for
    /// every template in the catalog.
    #[test]
    fn declared_variables_match_body_references() {
        for template in all() {
            let referenced = template
                .placeholders()
                .unwrap_or_else(|err| panic!("{}: {err}", template.name()));
            let declared: BTreeSet<&str> =
                template.required_variables().iter().copied().collect();
            assert_eq!(
                referenced,
                declared,
                "template '{}' body and declaration disagree",
                template.name()
            );
        }
    }

    #[test]
    fn no_duplicate_declared_variables() {
        for template in all() {
            let unique: BTreeSet<&str> =
                template.required_variables().iter().copied().collect();
            assert_eq!(
                unique.len(),
                template.required_variables().len(),
                "template '{}' declares a variable twice",
                template.name()
            );
        }
    }

    fn full_context(template: &Template) -> std::collections::HashMap<String, String> {
        vars(
            template
                .required_variables()
                .iter()
                .map(|&name| (name, format!("<{name}>"))),
        )
    }

    #[test]
    fn every_template_renders_with_exact_variables() {
        for template in all() {
            let rendered = template
                .render(&full_context(template))
                .unwrap_or_else(|err| panic!("{}: {err}", template.name()));
            for &name in template.required_variables() {
                assert!(
                    !rendered.contains(&format!("{{{name}}}")),
                    "template '{}' left '{{{name}}}' unsubstituted",
                    template.name()
                );
            }
        }
    }

    #[test]
    fn omitting_any_variable_is_a_missing_variable_error() {
        for template in all() {
            for &omitted in template.required_variables() {
                let mut context = full_context(template);
                context.remove(omitted);
                let err = template.render(&context).unwrap_err();
                assert_eq!(
                    err,
                    TemplateError::MissingVariable {
                        template: template.name(),
                        name: omitted.to_string(),
                    }
                );
            }
        }
    }

    #[test]
    fn extra_context_key_is_an_unknown_variable_error() {
        for template in all() {
            let mut context = full_context(template);
            context.insert("zzz_extra".to_string(), "x".to_string());
            let err = template.render(&context).unwrap_err();
            assert_eq!(
                err,
                TemplateError::UnknownVariable {
                    template: template.name(),
                    name: "zzz_extra".to_string(),
                }
            );
        }
    }

    #[test]
    fn rendering_is_deterministic_across_calls() {
        for template in all() {
            let context = full_context(template);
            assert_eq!(
                template.render(&context).unwrap(),
                template.render(&context).unwrap()
            );
        }
    }

    #[test]
    fn start_goal_substitutes_the_goal() {
        let rendered = START_GOAL
            .render(&vars([
                ("goal", "Plan a trip to Japan"),
                ("language", "English"),
            ]))
            .unwrap();
        assert!(rendered.contains("Plan a trip to Japan"));
        assert!(!rendered.contains("{goal}"));
        assert!(rendered.contains("Use at most 4 steps."));
        assert!(rendered.contains("formatted array of strings that can be used in JSON.parse()"));
    }

    #[test]
    fn analyze_task_keeps_the_response_shape_instruction() {
        let rendered = ANALYZE_TASK
            .render(&vars([
                ("goal", "g"),
                ("task", "t"),
                ("tools_overview", "search, code"),
                ("language", "English"),
            ]))
            .unwrap();
        assert!(rendered.contains("\"reasoning\""));
        assert!(rendered.contains("\"action\""));
        assert!(rendered.contains("\"arg\""));
        assert!(rendered.contains("search, code"));
        assert!(rendered.contains("You cannot pick an action outside of this list."));
    }

    /// The brace-escaped shape block unescapes into parseable JSON.
    #[test]
    fn analyze_task_shape_block_is_valid_json() {
        let rendered = ANALYZE_TASK
            .render(&vars([
                ("goal", "g"),
                ("task", "t"),
                ("tools_overview", "search: search the web"),
                ("language", "English"),
            ]))
            .unwrap();
        let open = rendered.find('{').unwrap();
        let close = rendered[open..].find('}').unwrap() + open;
        let block: serde_json::Value = serde_json::from_str(&rendered[open..=close]).unwrap();
        let object = block.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["reasoning", "action", "arg"] {
            assert_eq!(object[key], "string");
        }
    }

    #[test]
    fn code_requests_localized_comments() {
        let rendered = CODE
            .render(&vars([
                ("goal", "build a parser"),
                ("language", "French"),
                ("task", "write the lexer"),
            ]))
            .unwrap();
        assert!(
            rendered
                .contains("Write code in English but explanations/comments in the \"French\" language.")
        );
        assert!(rendered.contains("Write code to accomplish the following:\n    write the lexer"));
    }

    #[test]
    fn execute_task_embeds_objective_and_subtask() {
        let rendered = EXECUTE_TASK
            .render(&vars([
                ("goal", "ship v1"),
                ("language", "English"),
                ("task", "draft the changelog"),
            ]))
            .unwrap();
        assert!(rendered.contains("overall objective `ship v1`"));
        assert!(rendered.contains("sub-task, `draft the changelog`."));
    }

    #[test]
    fn create_tasks_keeps_the_stop_instruction_verbatim() {
        let rendered = CREATE_TASKS
            .render(&vars([
                ("goal", "g"),
                ("language", "English"),
                ("tasks", "[]"),
                ("lastTask", "do X"),
                ("result", "done"),
            ]))
            .unwrap();
        assert!(
            rendered.contains("If no new or further tasks are needed, return [] and nothing else")
        );
        assert!(rendered.contains("`do X`"));
        assert!(rendered.contains("`done`"));
    }

    #[test]
    fn summarize_keeps_the_citation_instructions() {
        let rendered = SUMMARIZE
            .render(&vars([
                ("goal", "g"),
                ("language", "English"),
                ("query", "latest NBA news"),
                ("snippets", "snippet text"),
            ]))
            .unwrap();
        assert!(rendered.contains("Use the index as the citation text."));
        assert!(rendered.contains("Do not list sources at the end of the writing."));
        assert!(rendered.contains("[1](https://test.com)"));
    }

    #[test]
    fn find_resolves_every_catalog_name() {
        for template in all() {
            let found = find(template.name()).unwrap();
            assert_eq!(found.name(), template.name());
        }
        assert!(find("no_such_template").is_none());
    }
}
