//! Subcommand handlers

use std::collections::HashMap;
use std::io::Read;

use anyhow::{bail, Context};

use markpad::app::AppState;
use markpad::editor::{render_html, render_page, Document, Format};
use markpad::prompts::engine::parse_assignment;
use markpad::prompts::{extract_variables, unfilled_variables, TemplateFilter};
use markpad::providers::{openrouter, ProviderKind};
use markpad::storage::documents::{load_markdown, save_markdown};
use markpad::storage::PlanService;
use markpad::types::{ModelInfo, PlanDraft};

use crate::{ConfigCommands, HistoryCommands, MdCommands, PlanCommands, TemplateCommands};

pub fn plans(app: &AppState, command: PlanCommands) -> anyhow::Result<()> {
    let plans = app.plans();

    match command {
        PlanCommands::List => {
            let all = plans.get_plans();
            if all.is_empty() {
                println!("No plans yet. Create one with `markpad plans add`.");
                return Ok(());
            }
            for plan in all {
                println!("{}  {:<24} {:>10.2}  {}", plan.id, plan.name, plan.price, plan.description);
            }
        }
        PlanCommands::Show { id } => {
            let plan = find_plan(&plans, &id)?;
            println!("ID:          {}", plan.id);
            println!("Name:        {}", plan.name);
            println!("Price:       {:.2}", plan.price);
            println!("Description: {}", plan.description);
        }
        PlanCommands::Add {
            name,
            description,
            price,
        } => {
            let plan = plans.create_plan(PlanDraft::new(name, description, price))?;
            println!("Created plan {}", plan.id);
        }
        PlanCommands::Update {
            id,
            name,
            description,
            price,
        } => {
            let current = find_plan(&plans, &id)?;
            let mut draft = PlanDraft::from(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            plans.update_plan(&id, draft)?;
            println!("Updated plan {}", id);
        }
        PlanCommands::Delete { id } => {
            plans.delete_plan(&id)?;
            println!("Deleted plan {}", id);
        }
    }

    Ok(())
}

fn find_plan(plans: &PlanService, id: &str) -> anyhow::Result<markpad::types::Plan> {
    if !PlanService::validate_plan_id(id) {
        bail!("Plan ID is required");
    }
    plans
        .get_plan_by_id(id)
        .with_context(|| format!("Plan with ID {} not found", id))
}

pub async fn templates(app: &AppState, command: TemplateCommands) -> anyhow::Result<()> {
    let library = app.prompts();

    match command {
        TemplateCommands::List {
            category,
            favorites,
        } => {
            let filter = TemplateFilter {
                category,
                favorites_only: favorites,
            };
            let templates = library.filter(&filter);
            if templates.is_empty() {
                println!("No templates match.");
            }
            for template in templates {
                let star = if template.is_favorite { "*" } else { " " };
                println!(
                    "{} {:<26} {:<32} [{}]",
                    star, template.id, template.name, template.category
                );
            }
        }
        TemplateCommands::Categories => {
            for category in library.get_categories() {
                let count = library.get_prompt_templates_by_category(&category).len();
                println!("{:<14} {}", category, count);
            }
        }
        TemplateCommands::Show { id } => {
            let template = library
                .get_prompt_template(&id)
                .with_context(|| format!("Unknown template: {}", id))?;
            println!("{} ({})", template.name, template.category);
            println!("{}", template.description);
            println!("Variables: {}", extract_variables(&template.template).join(", "));
            println!();
            println!("{}", template.template);
        }
        TemplateCommands::Fill {
            id,
            vars,
            send,
            model,
        } => {
            let mut values = HashMap::new();
            for raw in &vars {
                let (key, value) = parse_assignment(raw)
                    .with_context(|| format!("Expected name=value, got `{}`", raw))?;
                values.insert(key, value);
            }

            let template = library
                .get_prompt_template(&id)
                .with_context(|| format!("Unknown template: {}", id))?;
            let missing = unfilled_variables(&template.template, &values);
            if !missing.is_empty() {
                tracing::warn!("Unfilled variables: {}", missing.join(", "));
            }

            let prompt = library
                .fill_prompt_template(&id, &values)
                .with_context(|| format!("Unknown template: {}", id))?;

            match send {
                Some(provider) => ask(app, &provider, &prompt, model.as_deref()).await?,
                None => println!("{}", prompt),
            }
        }
        TemplateCommands::Favorite { id } => {
            if library.get_prompt_template(&id).is_none() {
                bail!("Unknown template: {}", id);
            }
            let now = library.toggle_favorite(&id)?;
            println!(
                "{} {}",
                id,
                if now { "added to favorites" } else { "removed from favorites" }
            );
        }
    }

    Ok(())
}

pub async fn ask(
    app: &AppState,
    provider: &str,
    prompt: &str,
    model: Option<&str>,
) -> anyhow::Result<()> {
    let kind: ProviderKind = provider.parse()?;
    let prompt = if prompt == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading prompt from stdin")?;
        buf
    } else {
        prompt.to_string()
    };

    let answer = app.ask(kind, &prompt, model).await?;
    println!("{}", answer.completion.content);

    if let Some(usage) = answer.completion.usage {
        tracing::info!(
            "{} tokens ({} prompt, {} completion)",
            usage.total_tokens,
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }
    if let Some(saved) = answer.saved {
        eprintln!("Saved as {}", saved.id);
    }

    Ok(())
}

pub async fn models(app: &AppState, provider: Option<&str>) -> anyhow::Result<()> {
    let kinds = match provider {
        Some(p) => vec![p.parse::<ProviderKind>()?],
        None => vec![ProviderKind::Groq, ProviderKind::OpenRouter],
    };

    for kind in kinds {
        println!("{}:", kind.label());
        let listed = match kind {
            ProviderKind::Groq => match app.groq() {
                Ok(client) => client.list_models().await,
                Err(e) => Err(e),
            },
            ProviderKind::OpenRouter => Ok(openrouter::popular_models()),
        };
        match listed {
            Ok(models) => models.iter().for_each(print_model),
            // One provider failing shouldn't hide the other
            Err(e) if provider.is_none() => eprintln!("  unavailable: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn print_model(model: &ModelInfo) {
    match &model.pricing {
        Some(pricing) => println!(
            "  {:<36} {:<20} {}/1M prompt, {}/1M completion",
            model.id, model.name, pricing.prompt, pricing.completion
        ),
        None => println!("  {:<36} {}", model.id, model.name),
    }
}

pub fn history(app: &AppState, command: HistoryCommands) -> anyhow::Result<()> {
    let history = app.history();

    match command {
        HistoryCommands::List { limit } => {
            let saved = history.get_saved_responses();
            if saved.is_empty() {
                println!("No saved responses.");
            }
            for entry in saved.iter().take(limit) {
                let when = entry
                    .saved_at()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!("{}  {}  {:<28} {}", entry.id, when, entry.model, preview_line(&entry.prompt));
            }
        }
        HistoryCommands::Show { id } => {
            let entry = history
                .get_response(&id)
                .with_context(|| format!("No saved response with ID {}", id))?;
            println!("Model: {}", entry.model);
            println!("Prompt:\n{}\n", entry.prompt);
            println!("Response:\n{}", entry.response);
        }
        HistoryCommands::Delete { id } => {
            if !history.delete_response(&id)? {
                bail!("No saved response with ID {}", id);
            }
            println!("Deleted {}", id);
        }
        HistoryCommands::Clear => {
            history.clear_all_responses()?;
            println!("History cleared");
        }
    }

    Ok(())
}

fn preview_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > 60 {
        format!("{}...", line.chars().take(57).collect::<String>())
    } else {
        line.to_string()
    }
}

pub fn markdown(app: &AppState, command: MdCommands) -> anyhow::Result<()> {
    match command {
        MdCommands::New { name, dir } => {
            let name = name.unwrap_or_else(|| app.settings.document_name.clone());
            let path = save_markdown(&dir, Some(&name), Document::default().text())?;
            println!("{}", path.display());
        }
        MdCommands::Format {
            file,
            action,
            start,
            end,
        } => {
            let format: Format = action.parse()?;
            let text = load_markdown(&file)?;
            let mut doc = Document::from_text(text);
            let start = start.unwrap_or(doc.text().len());
            doc.set_selection(start, end.unwrap_or(start));
            doc.apply_format(format);

            std::fs::write(&file, doc.text())
                .with_context(|| format!("writing {}", file.display()))?;
            println!("Applied {} (cursor at {})", format.label(), doc.selection().start);
        }
        MdCommands::Preview {
            file,
            out,
            standalone,
        } => {
            let text = load_markdown(&file)?;
            let html = if standalone {
                let title = file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Preview".to_string());
                render_page(&title, &text)
            } else {
                render_html(&text)
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("{}", path.display());
                }
                None => print!("{}", html),
            }
        }
    }

    Ok(())
}

pub fn config(app: &mut AppState, command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            let s = &app.settings;
            println!("groq_api_key:          {}", mask(s.groq_key().as_deref()));
            println!("openrouter_api_key:    {}", mask(s.openrouter_key().as_deref()));
            println!("groq_model:            {}", s.groq_model);
            println!("openrouter_model:      {}", s.openrouter_model);
            println!("temperature:           {}", s.temperature);
            println!("groq_max_tokens:       {}", s.groq_max_tokens);
            println!("openrouter_max_tokens: {}", s.openrouter_max_tokens);
            println!("save_responses:        {}", s.save_responses);
            println!("document_name:         {}", s.document_name);
        }
        ConfigCommands::Path => {
            if let Some(dir) = app.data_dir() {
                println!("{}", dir.display());
            }
        }
        ConfigCommands::SetKey { provider, key } => {
            let key = Some(key.trim().to_string()).filter(|k| !k.is_empty());
            match provider.parse::<ProviderKind>()? {
                ProviderKind::Groq => app.settings.groq_api_key = key,
                ProviderKind::OpenRouter => app.settings.openrouter_api_key = key,
            }
            app.save_settings()?;
            println!("Saved {} API key", provider);
        }
        ConfigCommands::SetModel { provider, model } => {
            match provider.parse::<ProviderKind>()? {
                ProviderKind::Groq => app.settings.groq_model = model,
                ProviderKind::OpenRouter => {
                    if openrouter::find_model(&model).is_none() {
                        tracing::warn!("{} is not in the popular model list", model);
                    }
                    app.settings.openrouter_model = model;
                }
            }
            app.save_settings()?;
            println!("Saved {} model", provider);
        }
    }

    Ok(())
}

fn mask(key: Option<&str>) -> String {
    match key {
        None => "(not set)".to_string(),
        Some(k) if k.chars().count() <= 8 => "********".to_string(),
        Some(k) => {
            let tail: String = k.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
            format!("********{}", tail)
        }
    }
}
