// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML rendering for the localized site pages.
//!
//! Pages are plain server-rendered HTML. Every string that comes from a
//! dictionary is escaped before it is written; every key is optional and
//! falls back to built-in English copy.

use std::borrow::Cow;
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use nextstep_common_i18n::{Dictionary, LocaleInfo, LocaleSet};
use serde_json::Value;

/// Everything a page needs to render in one locale.
pub struct PageContext<'a> {
	pub locale: &'static LocaleInfo,
	/// The configured locale set, listed by the language switcher.
	pub locales: &'a LocaleSet,
	pub dictionary: &'a Dictionary,
	/// Path below the locale prefix (`""` for home, `"/about"`).
	pub sub_path: &'a str,
	/// Public origin, e.g. `https://makeyournextstep.com`.
	pub base_url: &'a str,
}

impl<'a> PageContext<'a> {
	/// Escaped text for `key`, or the escaped `default`.
	fn t(&self, key: &str, default: &'a str) -> Cow<'a, str> {
		encode_text(self.dictionary.text_or(key, default))
	}

	/// Attribute-escaped text for `key`, or the escaped `default`.
	fn attr(&self, key: &str, default: &'a str) -> Cow<'a, str> {
		encode_double_quoted_attribute(self.dictionary.text_or(key, default))
	}

	fn lang(&self) -> &'static str {
		self.locale.code
	}

	/// Absolute, attribute-escaped URL of the current page under `code`.
	fn page_url(&self, code: &str) -> String {
		encode_double_quoted_attribute(&format!("{}/{code}{}", self.base_url, self.sub_path))
			.into_owned()
	}
}

/// String field of a record inside a dictionary array, or `""`.
fn field<'v>(item: &'v Value, key: &str) -> &'v str {
	item.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Wrap `main` in the document shell, navbar and footer.
pub fn layout(ctx: &PageContext<'_>, title: &str, main: &str) -> String {
	let lang = ctx.lang();
	let dir = ctx.locale.direction.as_html_dir();
	let align = ctx.locale.direction.text_align_start();
	let title = encode_text(title);
	let description = ctx.attr(
		"meta.description",
		"Guidance for students applying to universities abroad.",
	);

	let mut alternates = String::new();
	let _ = writeln!(
		alternates,
		r#"    <link rel="canonical" href="{href}">"#,
		href = ctx.page_url(lang),
	);
	for info in ctx.locales.iter() {
		let _ = writeln!(
			alternates,
			r#"    <link rel="alternate" hreflang="{code}" href="{href}">"#,
			code = info.code,
			href = ctx.page_url(info.code),
		);
	}
	let _ = writeln!(
		alternates,
		r#"    <link rel="alternate" hreflang="x-default" href="{href}">"#,
		href = ctx.page_url(ctx.locales.default_locale()),
	);

	format!(
		r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
{alternates}    <link rel="stylesheet" href="/_assets/site.css">
</head>
<body style="text-align: {align};">
{navbar}
<main class="min-h-screen">
{main}
</main>
{footer}
<script src="/_assets/contact.js" defer></script>
</body>
</html>"#,
		navbar = navbar(ctx),
		footer = footer(ctx),
	)
}

fn navbar(ctx: &PageContext<'_>) -> String {
	let lang = ctx.lang();
	let logo = ctx.attr("nav.logo", "_assets/logo.png");
	let items = [
		(format!("/{lang}"), ctx.t("nav.home", "Home")),
		(format!("/{lang}/about"), ctx.t("nav.about", "About")),
		(format!("/{lang}#services"), ctx.t("nav.services", "Services")),
		(format!("/{lang}#contact"), ctx.t("nav.contact", "Contact")),
	];

	let current = format!("/{lang}{}", ctx.sub_path);
	let mut links = String::new();
	for (href, label) in &items {
		let active = if *href == current {
			r#" aria-current="page""#
		} else {
			""
		};
		let _ = writeln!(links, r#"      <li><a href="{href}"{active}>{label}</a></li>"#);
	}

	format!(
		r#"<header class="navbar">
  <a class="logo" href="/{lang}"><img src="/{logo}" alt="Make Your Next Step"></a>
  <nav>
    <ul>
{links}    </ul>
  </nav>
{switcher}
  <a class="cta" href="/{lang}#contact">{cta}</a>
</header>"#,
		switcher = language_switcher(ctx),
		cta = ctx.t("nav.cta", "Book Free Consultation"),
	)
}

/// Links to the current page under every configured locale.
pub fn language_switcher(ctx: &PageContext<'_>) -> String {
	let label = ctx.attr("nav.language", "Select Language");
	let path = encode_double_quoted_attribute(ctx.sub_path);

	let mut items = String::new();
	for info in ctx.locales.iter() {
		let current = if info.code == ctx.lang() {
			r#" aria-current="true""#
		} else {
			""
		};
		let _ = writeln!(
			items,
			r#"      <li><a href="/{code}{path}" hreflang="{code}" lang="{code}" dir="{dir}"{current}>{name}</a></li>"#,
			code = info.code,
			dir = info.direction.as_html_dir(),
			name = encode_text(info.native_name),
		);
	}

	format!(
		r#"  <nav class="language-switcher" aria-label="{label}">
    <ul>
{items}    </ul>
  </nav>"#
	)
}

fn footer(ctx: &PageContext<'_>) -> String {
	let lang = ctx.lang();
	format!(
		r#"<footer class="footer">
  <div class="brand">
    <a href="/{lang}"><img src="/{logo}" alt="Make Your Next Step"></a>
    <p>{tagline}</p>
  </div>
  <div class="quick-links">
    <h3>{quick_title}</h3>
    <ul>
      <li><a href="/{lang}">{home}</a></li>
      <li><a href="/{lang}/about">{about}</a></li>
      <li><a href="/{lang}#services">{services}</a></li>
      <li><a href="/{lang}#contact">{contact}</a></li>
    </ul>
  </div>
  <div class="services">
    <h3>{services_title}</h3>
    <ul>
      <li>{applications}</li>
      <li>{visa}</li>
      <li>{scholarship}</li>
      <li>{test_prep}</li>
      <li>{pre_departure}</li>
    </ul>
  </div>
  <div class="contact">
    <h3>{contact_title}</h3>
    <p>{address}</p>
    <p dir="ltr">{phone}</p>
    <p dir="ltr">{email}</p>
  </div>
  <div class="newsletter">
    <h3>{newsletter_title}</h3>
    <input type="email" placeholder="{newsletter_placeholder}">
    <button type="button">{newsletter_button}</button>
  </div>
  <p class="copyright">{copyright}</p>
</footer>"#,
		logo = ctx.attr("footer.logo", "_assets/logo-light.png"),
		tagline = ctx.t("footer.tagline", "Helping students achieve their global dreams."),
		quick_title = ctx.t("footer.quickLinks.title", "Quick Links"),
		home = ctx.t("footer.quickLinks.home", "Home"),
		about = ctx.t("footer.quickLinks.about", "About"),
		services = ctx.t("footer.quickLinks.services", "Services"),
		contact = ctx.t("footer.quickLinks.contact", "Contact"),
		services_title = ctx.t("footer.services.title", "Services"),
		applications = ctx.t(
			"footer.services.universityApplications",
			"University Applications"
		),
		visa = ctx.t("footer.services.visaGuidance", "Visa Guidance"),
		scholarship = ctx.t(
			"footer.services.scholarshipAssistance",
			"Scholarship Assistance"
		),
		test_prep = ctx.t("footer.services.testPrep", "Test Preparation"),
		pre_departure = ctx.t("footer.services.preDeparture", "Pre-Departure Support"),
		contact_title = ctx.t("footer.contact.title", "Contact"),
		address = ctx.t("footer.contact.address", ""),
		phone = ctx.t("footer.contact.phone", ""),
		email = ctx.t("footer.contact.email", ""),
		newsletter_title = ctx.t("footer.newsletter.title", "Newsletter"),
		newsletter_placeholder = ctx.attr("footer.newsletter.placeholder", "Your email"),
		newsletter_button = ctx.t("footer.newsletter.button", "Subscribe"),
		copyright = ctx.t(
			"footer.copyright",
			"© 2025 Make Your Next Step. All rights reserved."
		),
	)
}

/// `GET /{lang}`: hero, services, countries, team, partners and contact.
pub fn home_page(ctx: &PageContext<'_>) -> String {
	let title = ctx
		.dictionary
		.text_or("meta.title", "Make Your Next Step | Study Abroad Consultancy");
	let main = [
		hero_section(ctx),
		services_section(ctx),
		countries_section(ctx),
		team_section(ctx),
		partners_section(ctx),
		contact_section(ctx),
	]
	.join("\n");
	layout(ctx, title, &main)
}

/// `GET /{lang}/about`.
pub fn about_page(ctx: &PageContext<'_>) -> String {
	let title = ctx.dictionary.text_or("about.title", "About Us");
	let main = format!(
		r#"<section id="about" class="p-8">
  <h1>{title}</h1>
  <p>{description}</p>
</section>"#,
		title = encode_text(title),
		description = ctx.t("about.description", ""),
	);
	layout(ctx, title, &main)
}

/// Localized page for a path under a supported locale that has no handler.
pub fn not_found_page(ctx: &PageContext<'_>) -> String {
	let lang = ctx.lang();
	let main = format!(
		r#"<section id="not-found" class="p-8">
  <h1>404</h1>
  <p><a href="/{lang}">{home}</a></p>
</section>"#,
		home = ctx.t("nav.home", "Home"),
	);
	layout(ctx, "404", &main)
}

/// Shown when a routed page receives a locale outside the configured set.
pub fn unsupported_language_page(requested: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html lang="en" dir="ltr">
<head>
    <meta charset="utf-8">
    <title>Language not supported</title>
</head>
<body>
<div>Language not supported</div>
<p><code>{requested}</code></p>
</body>
</html>"#,
		requested = encode_text(requested),
	)
}

fn hero_section(ctx: &PageContext<'_>) -> String {
	let subtitle = ctx
		.dictionary
		.text_or(
			"hero.subtitle",
			"We guide you from choosing a university to landing in your new country.",
		)
		.split('\n')
		.map(|line| encode_text(line).into_owned())
		.collect::<Vec<_>>()
		.join("<br>");

	format!(
		r#"<section id="hero" class="hero">
  <h1>{title}</h1>
  <p>{subtitle}</p>
  <a class="cta" href="/{lang}#contact">{cta}</a>
  <p class="rating">{rating}</p>
  <p class="trust">{trust}</p>
</section>"#,
		lang = ctx.lang(),
		title = ctx.t("hero.title", "Your Future Starts Abroad"),
		cta = ctx.t("hero.cta", "Book Free Consultation"),
		rating = ctx.t("hero.rating", ""),
		trust = ctx.t("hero.trust", ""),
	)
}

fn services_section(ctx: &PageContext<'_>) -> String {
	let mut cards = String::new();
	for service in ctx.dictionary.list("services.services") {
		let _ = writeln!(
			cards,
			r#"    <li class="service" data-icon="{icon}"><h3>{title}</h3><p>{description}</p></li>"#,
			icon = encode_double_quoted_attribute(field(service, "icon")),
			title = encode_text(field(service, "title")),
			description = encode_text(field(service, "description")),
		);
	}

	format!(
		r#"<section id="services" class="services">
  <h2>{title}</h2>
  <p>{subtitle}</p>
  <ul>
{cards}  </ul>
  <div class="cta">
    <h3>{cta_title}</h3>
    <p>{cta_subtitle}</p>
    <a href="/{lang}#contact">{cta_button}</a>
  </div>
</section>"#,
		lang = ctx.lang(),
		title = ctx.t("services.title", "Our Services"),
		subtitle = ctx.t("services.subtitle", ""),
		cta_title = ctx.t("services.cta.title", "Not sure where to start?"),
		cta_subtitle = ctx.t("services.cta.subtitle", ""),
		cta_button = ctx.t("services.cta.button", "Get Started"),
	)
}

fn countries_section(ctx: &PageContext<'_>) -> String {
	let mut cards = String::new();
	for country in ctx.dictionary.list("countries.countries") {
		let _ = writeln!(
			cards,
			r#"    <li class="country" data-code="{code}"><span class="flag">{flag}</span> {name}</li>"#,
			code = encode_double_quoted_attribute(field(country, "code")),
			flag = encode_text(field(country, "flag")),
			name = encode_text(field(country, "name")),
		);
	}

	format!(
		r#"<section id="countries" class="countries">
  <h2>{title}</h2>
  <p>{subtitle}</p>
  <ul>
{cards}  </ul>
  <a href="/{lang}{link}">{cta}</a>
</section>"#,
		lang = ctx.lang(),
		title = ctx.t("countries.title", "Study Destinations"),
		subtitle = ctx.t("countries.subtitle", ""),
		link = ctx.attr("countries.cta.link", "#contact"),
		cta = ctx.t("countries.cta.text", "Find your destination"),
	)
}

fn team_section(ctx: &PageContext<'_>) -> String {
	let mut members = String::new();
	for member in ctx.dictionary.list("team.team") {
		let name = field(member, "name");
		let _ = writeln!(
			members,
			r#"    <li class="member"><img src="/{photo}" alt="{alt}"><h3>{name}</h3><p class="role">{role}</p><p>{bio}</p></li>"#,
			photo = encode_double_quoted_attribute(field(member, "photo")),
			alt = encode_double_quoted_attribute(name),
			name = encode_text(name),
			role = encode_text(field(member, "role")),
			bio = encode_text(field(member, "bio")),
		);
	}

	format!(
		r#"<section id="team" class="team">
  <h2>{title}</h2>
  <p>{subtitle}</p>
  <ul>
{members}  </ul>
  <ul class="stats">
    <li>{students}</li>
    <li>{success_rate}</li>
    <li>{countries}</li>
  </ul>
  <a href="/{lang}{link}">{cta}</a>
</section>"#,
		lang = ctx.lang(),
		title = ctx.t("team.title", "Meet Our Team"),
		subtitle = ctx.t("team.subtitle", ""),
		students = ctx.t("team.stats.students", ""),
		success_rate = ctx.t("team.stats.successRate", ""),
		countries = ctx.t("team.stats.countries", ""),
		link = ctx.attr("team.cta.link", "#contact"),
		cta = ctx.t("team.cta.text", "Talk to an advisor"),
	)
}

fn partners_section(ctx: &PageContext<'_>) -> String {
	let mut logos = String::new();
	for partner in ctx.dictionary.list("partners.partners") {
		let _ = writeln!(
			logos,
			r#"    <li class="partner"><img src="/{logo}" alt="{name}" loading="lazy"></li>"#,
			logo = encode_double_quoted_attribute(field(partner, "logo")),
			name = encode_double_quoted_attribute(field(partner, "name")),
		);
	}

	format!(
		r#"<section id="partners" class="partners">
  <h2>{title}</h2>
  <ul class="marquee">
{logos}  </ul>
</section>"#,
		title = ctx.t("partners.title", "Our Trusted Partners"),
	)
}

fn contact_section(ctx: &PageContext<'_>) -> String {
	format!(
		r#"<section id="contact" class="contact">
  <h2>{title}</h2>
  <p>{subtitle}</p>
  <form id="contact-form" data-endpoint="/api/contact" data-success="{success}">
    <label>{name_label} <input name="name" required placeholder="{name_placeholder}"></label>
    <label>{email_label} <input name="email" type="email" required placeholder="{email_placeholder}"></label>
    <label>{number_label} <input name="number" type="tel" placeholder="{number_placeholder}"></label>
    <label>{message_label} <textarea name="message" required placeholder="{message_placeholder}"></textarea></label>
    <button type="submit">{submit}</button>
  </form>
  <dl class="info">
    <dt>{phone_title}</dt><dd dir="ltr">{phone}</dd>
    <dt>{email_title}</dt><dd dir="ltr">{email}</dd>
    <dt>{address_title}</dt><dd>{address}</dd>
    <dt>{hours_title}</dt><dd>{hours}</dd>
  </dl>
</section>"#,
		title = ctx.t("contact.title", "Get in Touch"),
		subtitle = ctx.t("contact.subtitle", ""),
		success = ctx.attr(
			"contact.form.successMessage",
			"Thank you! We will contact you shortly."
		),
		name_label = ctx.t("contact.form.nameLabel", "Full name"),
		name_placeholder = ctx.attr("contact.form.namePlaceholder", ""),
		email_label = ctx.t("contact.form.emailLabel", "Email"),
		email_placeholder = ctx.attr("contact.form.emailPlaceholder", ""),
		number_label = ctx.t("contact.form.numberLabel", "Phone number"),
		number_placeholder = ctx.attr("contact.form.numberPlaceholder", ""),
		message_label = ctx.t("contact.form.messageLabel", "Message"),
		message_placeholder = ctx.attr("contact.form.messagePlaceholder", ""),
		submit = ctx.t("contact.form.submitButton", "Send Message"),
		phone_title = ctx.t("contact.info.phoneTitle", "Phone"),
		phone = ctx.t("contact.info.phone", ""),
		email_title = ctx.t("contact.info.emailTitle", "Email"),
		email = ctx.t("contact.info.email", ""),
		address_title = ctx.t("contact.info.addressTitle", "Office"),
		address = ctx.t("contact.info.address", ""),
		hours_title = ctx.t("contact.info.hoursTitle", "Hours"),
		hours = ctx.t("contact.info.hours", ""),
	)
}
