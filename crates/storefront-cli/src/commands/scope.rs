//! `storefront scope`: validate catalog promotion scope configurations.
//!
//! Responsibility: load the file, wire the adapters into the core
//! validators, and report the violations. No business rules live here.

use serde::Serialize;
use tracing::{debug, info, instrument};

use storefront_adapters::{
    InMemoryProductRepository, ScopeConfigLoader, StaticSectionProvider, UriSectionProvider,
};
use storefront_core::{
    application::{
        ForProductsApiScopeValidator, ProductCatalogScopeValidator, ScopeValidator, messages,
        ports::SectionProvider,
    },
    domain::{ApiContext, CatalogPromotionScope, ConstraintViolation, ExecutionContext},
};

use crate::{
    cli::{ScopeCommands, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable validation outcome.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    file: String,
    section: ApiContext,
    valid: bool,
    violations: &'a [ConstraintViolation],
}

/// Dispatch to the correct scope subcommand.
pub fn execute(cmd: ScopeCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ScopeCommands::Validate(args) => validate(args, &config, &output),
    }
}

#[instrument(skip_all, fields(file = %args.file.display()))]
fn validate(args: ValidateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let configuration = ScopeConfigLoader::load(&args.file)?;
    let section = resolve_section(&args, config)?;
    debug!(%section, keys = configuration.len(), "Validating scope");

    let repository = InMemoryProductRepository::with_codes(
        config.catalog.products.iter().chain(&args.products).cloned(),
    )
    .map_err(|e| CliError::InvalidInput {
        message: "catalog product codes must be non-empty letters, digits, '-', '_' or '.'"
            .into(),
        source: Some(Box::new(e)),
    })?;

    let validator = ForProductsApiScopeValidator::new(
        Box::new(ProductCatalogScopeValidator::new(Box::new(repository))),
        Box::new(StaticSectionProvider::new(section)),
    );

    let mut context = ExecutionContext::new();
    validator.validate(&configuration, &CatalogPromotionScope, &mut context)?;
    let violations = context.into_violations();

    if output.is_json() {
        output.json(&ValidationReport {
            file: args.file.display().to_string(),
            section,
            valid: violations.is_empty(),
            violations: &violations,
        })?;
    } else if violations.is_empty() {
        output.success(&format!(
            "{} is a valid scope for the {} API",
            args.file.display(),
            section
        ))?;
    } else {
        output.header(&format!("{} ({} API):", args.file.display(), section))?;
        for violation in &violations {
            output.error(&format!("{}  [{}]", describe(violation), violation))?;
        }
    }

    if violations.is_empty() {
        info!("Scope is valid");
        Ok(())
    } else {
        Err(CliError::ScopeViolations {
            count: violations.len(),
        })
    }
}

/// `--section` wins, then `--uri`, else the admin API.
fn resolve_section(args: &ValidateArgs, config: &AppConfig) -> CliResult<ApiContext> {
    if let Some(section) = args.section {
        return Ok(section.into());
    }

    match &args.uri {
        Some(uri) => Ok(UriSectionProvider::new(config.section_prefixes(), uri.as_str()).section()?),
        None => Ok(ApiContext::ManagementFacing),
    }
}

/// English rendering of a violation message key.
fn describe(violation: &ConstraintViolation) -> String {
    match violation.message_key() {
        messages::PRODUCTS_NOT_EMPTY => "At least one product is required".into(),
        messages::INVALID_PRODUCTS => match violation.parameters().get("{{ code }}") {
            Some(code) => format!("Product '{code}' does not exist"),
            None => "Products must be a list of existing product codes".into(),
        },
        other => other.to_string(),
    }
}
