//! Prompt rendering
//!
//! Pure formatting: one commit record plus one project record in, one text
//! block out. The first run gets the full project brief; later runs get a
//! one-line condensed summary. Everything after the project section is
//! identical between the two forms.

use crate::catalog::ProjectRecord;
use crate::store::CommitRecord;

/// Fixed condensed style summary used on non-first runs. Hard-coded rather
/// than derived from the active project record; only the project name varies.
pub const CONDENSED_STYLE_SUMMARY: &str = "Dark and light theme with purple & orange accents, \
     glassmorphism, smooth animations, modern layout and design.";

/// Render the task prompt for one commit.
///
/// `detailed` selects the full project brief (first run) over the condensed
/// one-liner (subsequent runs).
pub fn render(
    commit: &CommitRecord,
    project_name: &str,
    project: &ProjectRecord,
    detailed: bool,
) -> String {
    let project_info = if detailed {
        detailed_project_info(project)
    } else {
        format!("Project '{project_name}', {CONDENSED_STYLE_SUMMARY}")
    };

    format!(
        "\nYou are working on project '{project_name}'.
{project_info}

Commit Task Details:
- Commit Number: {number}
- Timestamp: {timestamp}
- Task: {task}
- Instructions: {instructions}
- Commit Message: {message}

Instructions for AI Agent:
1. Implement the task according to the project theme, style, stack, and mock data.
2. Ensure responsive design and smooth animations.
3. Use glassmorphism, and color accents as described.
4. Commit the changes with:
   {command}
5. Prepare for the next commit by running this command again to get the next task.

Output:
- Provide implementation steps for this commit only.
- Do not generate code unless explicitly instructed.
",
        number = commit.commit_number,
        timestamp = commit.timestamp,
        task = commit.task,
        instructions = commit.instructions,
        message = commit.commit_message,
        command = suggested_git_command(commit),
    )
}

/// Suggested shell command for the agent, with the commit message and
/// timestamp embedded verbatim. The commit source is trusted local input;
/// no shell escaping is applied, so a message containing quotes, `$`, or
/// backticks is not safe to execute as-is.
pub fn suggested_git_command(commit: &CommitRecord) -> String {
    format!(
        "git add . && git commit -m \"{}\" --date=\"{}\"",
        commit.commit_message, commit.timestamp
    )
}

fn detailed_project_info(project: &ProjectRecord) -> String {
    let mut info = String::new();

    info.push_str("\nProject Details:\n");
    info.push_str(&format!("- Theme: {}\n", project.theme));
    info.push_str(&format!(
        "- Primary colors: {}\n",
        project.primary_colors.join(", ")
    ));
    info.push_str(&format!(
        "- Accent colors: {}\n",
        project.accent_colors.join(", ")
    ));
    info.push_str(&format!("- Stack: {}\n", project.stack.join(", ")));
    info.push_str(&format!("- Style: {}\n", project.style));
    info.push_str(&format!("- Design Pattern: {}\n", project.design_pattern));
    info.push_str(&format!(
        "- Branding: logo ({}), font ({}), icon set ({})\n",
        project.branding.logo, project.branding.font, project.branding.icon_set
    ));

    if project.mock_data.is_empty() {
        info.push_str("- Mock Data: none\n");
    } else {
        info.push_str("- Mock Data:\n");
        for (category, descriptor) in &project.mock_data {
            info.push_str(&format!("  - {category}: {descriptor}\n"));
        }
    }

    info.push_str(&format!("- Special Effects: {}\n", project.special_effects));
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const PROJECT_NAME: &str = "Jovibe Portfolio";

    fn sample_commit() -> CommitRecord {
        CommitRecord {
            commit_number: 17,
            timestamp: "2024-03-05T14:20:00".to_string(),
            task: "Build testimonial carousel".to_string(),
            instructions: "Auto-rotating carousel with dots and arrows".to_string(),
            commit_message: "feat: testimonial carousel".to_string(),
        }
    }

    fn project() -> ProjectRecord {
        Catalog::builtin().get(PROJECT_NAME).unwrap().clone()
    }

    #[test]
    fn test_detailed_contains_commit_fields_verbatim() {
        let commit = sample_commit();
        let out = render(&commit, PROJECT_NAME, &project(), true);

        assert!(out.contains("- Commit Number: 17"));
        assert!(out.contains("- Timestamp: 2024-03-05T14:20:00"));
        assert!(out.contains("- Task: Build testimonial carousel"));
        assert!(out.contains("- Instructions: Auto-rotating carousel with dots and arrows"));
        assert!(out.contains("- Commit Message: feat: testimonial carousel"));
    }

    #[test]
    fn test_detailed_contains_every_project_label() {
        let out = render(&sample_commit(), PROJECT_NAME, &project(), true);

        assert!(out.contains("Project Details:"));
        assert!(out.contains("- Theme: Dark and light, Modern, Minimal"));
        assert!(out.contains("- Primary colors: #1e1e2f, #ffffff"));
        assert!(out.contains("- Accent colors: #9b59b6, #ff7f50"));
        assert!(out.contains("- Stack: HTML, CSS, JavaScript, TailwindCSS"));
        assert!(out.contains("- Style: Glassmorphism cards"));
        assert!(out.contains("- Design Pattern: Component-based"));
        assert!(out.contains(
            "- Branding: logo (jovibe_logo.png), font (Roboto, sans-serif), icon set (Material Icons)"
        ));
        assert!(out.contains("- Mock Data:"));
        assert!(out.contains("  - portfolio: 6-8 sample projects"));
        assert!(out.contains("  - contact_form: Mock form with name, email, message"));
        assert!(out.contains("- Special Effects: smooth color transitions"));
    }

    #[test]
    fn test_condensed_is_fixed_phrase_without_detail_labels() {
        let out = render(&sample_commit(), PROJECT_NAME, &project(), false);

        assert!(out.contains(&format!(
            "Project '{}', {}",
            PROJECT_NAME, CONDENSED_STYLE_SUMMARY
        )));
        assert!(!out.contains("Project Details:"));
        assert!(!out.contains("- Theme:"));
        assert!(!out.contains("- Branding:"));
        assert!(!out.contains("- Mock Data:"));
    }

    #[test]
    fn test_structural_block_identical_across_forms() {
        let commit = sample_commit();
        let detailed = render(&commit, PROJECT_NAME, &project(), true);
        let condensed = render(&commit, PROJECT_NAME, &project(), false);

        for out in [&detailed, &condensed] {
            assert!(out.starts_with(&format!(
                "\nYou are working on project '{PROJECT_NAME}'."
            )));
            assert!(out.contains("Instructions for AI Agent:"));
            assert!(out.contains("1. Implement the task according to the project theme"));
            assert!(out.contains("5. Prepare for the next commit"));
            assert!(out.contains("- Provide implementation steps for this commit only."));
            assert!(out.contains("- Do not generate code unless explicitly instructed."));
        }
    }

    #[test]
    fn test_git_command_embeds_fields_verbatim_unescaped() {
        let mut commit = sample_commit();
        commit.commit_message = r#"fix: "quoted" $HOME message"#.to_string();

        let command = suggested_git_command(&commit);
        assert_eq!(
            command,
            r#"git add . && git commit -m "fix: "quoted" $HOME message" --date="2024-03-05T14:20:00""#
        );

        let out = render(&commit, PROJECT_NAME, &project(), false);
        assert!(out.contains(&command));
    }
}
