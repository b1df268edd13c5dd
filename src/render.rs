use chrono::NaiveDate;

use crate::dom::Lightbox;
use crate::models::certificate::Certificate;
use crate::models::project::Project;
use crate::models::skill::Skill;

// Every function here is pure: the same record always yields the same
// fragment. Free text goes through `html_escape`; category and status
// tokens come from closed sets and are inserted as-is.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// "2024-01-01" → "January 2024". Anything unparsable is returned escaped.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%B %Y").to_string(),
        Err(_) => html_escape(raw),
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_badge(project: &Project) -> String {
    match project.status {
        Some(status) => format!(
            r#"<span class="status-badge status-badge--{}">{}</span>"#,
            status.token(),
            status.label()
        ),
        None => String::new(),
    }
}

/// One project card for the bento grid.
pub fn project_card(project: &Project) -> String {
    let featured_class = if project.featured {
        " bento-card--featured"
    } else {
        ""
    };
    let id = html_escape(&project.id);
    let title = html_escape(&project.title);

    let year = match project.display_year() {
        Some(y) => format!(r#"<span class="bento-card__year">{}</span>"#, y),
        None => String::new(),
    };

    let tags: String = project
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="tag tag--{}">{}</span>"#,
                project.category,
                html_escape(tag)
            )
        })
        .collect();

    let github = match project.github_url() {
        Some(url) => format!(
            r#"<a href="{}" class="btn btn--ghost btn--sm" target="_blank" rel="noopener noreferrer" aria-label="View {} on GitHub"><i class="fab fa-github" aria-hidden="true"></i> Code</a>"#,
            html_escape(url),
            title
        ),
        None => String::new(),
    };
    let demo = match project.demo_url() {
        Some(url) => format!(
            r#"<a href="{}" class="btn btn--outline btn--sm" target="_blank" rel="noopener noreferrer" aria-label="View {} demo"><i class="fas fa-external-link-alt" aria-hidden="true"></i> Demo</a>"#,
            html_escape(url),
            title
        ),
        None => String::new(),
    };

    format!(
        r#"<article class="bento-card{featured} bento-card--{category} animate-on-scroll" id="project-{id}" data-project-id="{id}" data-category="{category}" role="listitem" tabindex="0">
<div class="bento-card__image"><img src="{image}" alt="{title}" loading="lazy" decoding="async">{status}</div>
<div class="bento-card__content glass glass--subtle">
<div class="bento-card__header"><h3 class="bento-card__title">{title}</h3>{year}</div>
<p class="bento-card__description">{description}</p>
<div class="bento-card__tags">{tags}</div>
<div class="bento-card__actions">{github}{demo}<a href="/projects/{id}" class="btn btn--text btn--sm project-details-btn" data-project-id="{id}" aria-label="View details for {title}">Details</a></div>
</div>
</article>"#,
        featured = featured_class,
        category = project.category,
        id = id,
        image = html_escape(&project.image),
        title = title,
        status = status_badge(project),
        year = year,
        description = html_escape(&project.description),
        tags = tags,
        github = github,
        demo = demo,
    )
}

/// Expanded view of a single project.
pub fn project_detail(project: &Project) -> String {
    let mut html = format!(
        r#"<section class="project-detail" data-project-id="{id}" data-category="{category}"><h2 class="project-detail__title">{title}</h2>"#,
        id = html_escape(&project.id),
        category = project.category,
        title = html_escape(&project.title),
    );

    let mut meta = Vec::new();
    if !project.client.is_empty() {
        meta.push(html_escape(&project.client));
    }
    if let Some(y) = project.display_year() {
        meta.push(y.to_string());
    }
    if let Some(status) = project.status {
        meta.push(status.label().to_string());
    }
    if !meta.is_empty() {
        html.push_str(&format!(
            r#"<p class="project-detail__meta">{}</p>"#,
            meta.join(" · ")
        ));
    }

    let body = if project.long_description.is_empty() {
        &project.description
    } else {
        &project.long_description
    };
    html.push_str(&format!(
        r#"<p class="project-detail__description">{}</p>"#,
        html_escape(body)
    ));

    if let Some(highlights) = project.highlights.as_ref().filter(|h| !h.is_empty()) {
        html.push_str(r#"<ul class="project-detail__highlights">"#);
        for h in highlights {
            html.push_str(&format!("<li>{}</li>", html_escape(h)));
        }
        html.push_str("</ul>");
    }

    html.push_str("</section>");
    html
}

fn skill_card(skill: &Skill) -> String {
    format!(
        r#"<div class="skill-card glass glass--subtle animate-on-scroll"><div class="skill-card__icon">{icon}</div><div class="skill-card__content"><h4 class="skill-card__name">{name}</h4><div class="skill-card__level"><span class="skill-level skill-level--{level}">{level}</span></div></div></div>"#,
        icon = html_escape(&skill.icon),
        name = html_escape(&skill.name),
        level = skill.level.token(),
    )
}

/// Group skills by category in order of first appearance.
pub fn group_skills<'a>(skills: &[&'a Skill]) -> Vec<(String, Vec<&'a Skill>)> {
    let mut groups: Vec<(String, Vec<&'a Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter().position(|(name, _)| name == skill.group()) {
            Some(i) => groups[i].1.push(*skill),
            None => groups.push((skill.group().to_string(), vec![*skill])),
        }
    }
    groups
}

/// One category block of the skills section.
pub fn skill_group(category: &str, skills: &[&Skill]) -> String {
    let cards: String = skills.iter().map(|s| skill_card(s)).collect();
    format!(
        r#"<div class="skills-category" data-category="{key}"><h3 class="skills-category__title">{title}</h3><div class="skills-list">{cards}</div></div>"#,
        key = html_escape(category),
        title = html_escape(&capitalize(category)),
        cards = cards,
    )
}

pub fn certificate_card(cert: &Certificate) -> String {
    let date = match cert.display_date() {
        Some(d) => format!(r#"<p class="cert-card__date">{}</p>"#, format_date(d)),
        None => String::new(),
    };
    let link = match cert.link() {
        Some(url) => format!(
            r#"<a href="{}" class="cert-card__link" target="_blank" rel="noopener noreferrer">View credential</a>"#,
            html_escape(url)
        ),
        None => String::new(),
    };
    let id = html_escape(&cert.id);
    let query: String = url::form_urlencoded::byte_serialize(cert.id.as_bytes()).collect();

    format!(
        r#"<div class="cert-card glass glass--subtle animate-on-scroll" data-cert-id="{id}" role="listitem" tabindex="0">
<a class="cert-card__image" href="/?certificate={query}#certificates"><img src="{image}" alt="{title}" loading="lazy" decoding="async"></a>
<div class="cert-card__content"><h3 class="cert-card__title">{title}</h3><p class="cert-card__issuer">{issuer}</p>{date}{link}</div>
</div>"#,
        id = id,
        query = query,
        image = html_escape(&cert.image),
        title = html_escape(&cert.title),
        issuer = html_escape(&cert.issuer),
        date = date,
        link = link,
    )
}

/// Certificate lightbox with its image and title slots filled from `lightbox`.
pub fn lightbox(lightbox: &Lightbox) -> String {
    let (open_class, hidden) = if lightbox.is_open() {
        (" is-open", "false")
    } else {
        ("", "true")
    };
    format!(
        r##"<div id="cert-modal" class="cert-modal{open_class}" aria-hidden="{hidden}" role="dialog">
<a class="cert-modal__backdrop" href="#certificates" aria-label="Close"></a>
<div class="cert-modal__content"><a class="cert-modal__close" href="#certificates" aria-label="Close">&times;</a>
<img id="cert-modal-image" src="{image}" alt="{alt}"><h3 id="cert-modal-title">{title}</h3></div>
</div>"##,
        open_class = open_class,
        hidden = hidden,
        image = html_escape(lightbox.image()),
        alt = html_escape(lightbox.alt()),
        title = html_escape(lightbox.title()),
    )
}

/// Placeholder shown by the page when a filter leaves the grid empty.
pub fn empty_projects() -> &'static str {
    r#"<p class="bento-grid__empty">No projects match the current filter.</p>"#
}
