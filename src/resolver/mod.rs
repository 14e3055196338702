//! Resolution Orchestrator.
//!
//! Drives one API reference through `Searching -> Extracting -> Parsing ->
//! Classifying -> Resolved | Failed`. The only suspension points are the two
//! collaborator calls; everything after them is synchronous. Each resolution
//! either returns a complete [`ResolvedEntry`] or an error, never a partial
//! entry.
//!
//! Cancellation is cooperative: the token is raced against each collaborator
//! call and checked again before the entry is built. A cancelled resolution
//! always reports [`ResolveError::Cancelled`].

pub mod search;

pub use search::{parse_search_results, SearchHit, SearchResults};

use crate::catalog::{PointerWidth, TypeMapper};
use crate::config::RuleSet;
use crate::core::{
    PrototypeKind, ReferenceKind, ResolveError, ResolvedEntry, ResolvedSlot, Result,
    StringEncoding, TransportError, TypeQualifier,
};
use crate::extract::{normalize_declarator, FunctionPrototype, PrototypeExtractor};
use crate::io::{DeclaredTypes, NoDeclaredTypes, PageExtractor, SearchService};
use crate::modifier::combine;
use crate::observability::ResolutionPhase;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, debug_span, info, info_span, warn, Instrument};

/// Await `work` unless `cancel` fires first.
async fn until_cancelled<T>(
    cancel: &CancellationToken,
    work: impl Future<Output = std::result::Result<T, TransportError>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ResolveError::Cancelled),
        outcome = work => outcome.map_err(ResolveError::from),
    }
}

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        Err(ResolveError::Cancelled)
    } else {
        Ok(())
    }
}

/// Classify one written type token into a slot.
fn classify_slot(
    mapper: &TypeMapper<'_>,
    name: Option<String>,
    type_token: &str,
    declared: TypeQualifier,
    is_optional: bool,
    fixed_array_length: Option<String>,
) -> ResolvedSlot {
    let declarator = normalize_declarator(type_token);
    let declared = TypeQualifier {
        pointer_level: declared.pointer_level + declarator.pointer_level,
        ..declared
    };
    let mapping = mapper.map_native(&declarator.base);

    // Without a stated direction no reference supplies the first level of
    // indirection, so every `*` stays a plain pointer on the native type.
    let qualifier = if declared.reference_kind == ReferenceKind::None && declared.pointer_level > 0
    {
        TypeQualifier {
            pointer_level: mapping.qualifier.pointer_level + declared.pointer_level,
            ..mapping.qualifier
        }
    } else {
        combine(mapping.qualifier, declared)
    };

    ResolvedSlot {
        name,
        native_type: declarator.base,
        constant_value: None,
        fixed_array_length,
        declared,
        qualifier,
        target: mapping.target,
        stage: mapping.stage,
        is_optional,
    }
}

/// Build a function entry from a parsed prototype.
///
/// Tokens that do not classify leave an unresolved marker in their slot;
/// they never fail the entry.
pub fn assemble_entry(
    extractor: &PrototypeExtractor<'_>,
    mapper: &TypeMapper<'_>,
    prototype: FunctionPrototype,
    owning_module: &str,
    source_url: &str,
) -> ResolvedEntry {
    let mut slots = Vec::with_capacity(prototype.parameters.len() + 1);
    slots.push(classify_slot(
        mapper,
        None,
        &prototype.return_type,
        TypeQualifier::NONE,
        false,
        None,
    ));

    for param in prototype.parameters {
        let direction = param
            .ref_text
            .as_deref()
            .map(|text| extractor.parse_directionality(text.trim_start_matches(',').trim()))
            .unwrap_or_default();
        slots.push(classify_slot(
            mapper,
            Some(param.name),
            &param.type_token,
            TypeQualifier::new(StringEncoding::None, direction.reference_kind, 0),
            direction.is_optional,
            param.fixed_array_length,
        ));
    }

    let entry = ResolvedEntry {
        name: prototype.name,
        kind: PrototypeKind::Function,
        owning_module: owning_module.trim().to_string(),
        source_url: source_url.to_string(),
        slots,
        extended_slots: Vec::new(),
        nested_entries: Vec::new(),
    };

    let unresolved = entry.unresolved_tokens();
    if !unresolved.is_empty() {
        warn!(entry = %entry.name, tokens = ?unresolved, "unresolved native types");
    }
    entry
}

/// Searches for and resolves API references against shared, read-only rules.
pub struct Resolver<S, P> {
    rules: Arc<RuleSet>,
    search: S,
    pages: P,
    declared: Arc<dyn DeclaredTypes>,
    pointer_width: PointerWidth,
}

impl<S: SearchService, P: PageExtractor> Resolver<S, P> {
    pub fn new(rules: Arc<RuleSet>, search: S, pages: P) -> Self {
        Self {
            rules,
            search,
            pages,
            declared: Arc::new(NoDeclaredTypes),
            pointer_width: PointerWidth::host(),
        }
    }

    pub fn with_pointer_width(mut self, pointer_width: PointerWidth) -> Self {
        self.pointer_width = pointer_width;
        self
    }

    pub fn with_declared_types(mut self, declared: Arc<dyn DeclaredTypes>) -> Self {
        self.declared = declared;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn mapper(&self) -> TypeMapper<'_> {
        TypeMapper::new(&self.rules)
            .with_pointer_width(self.pointer_width)
            .with_declared_types(self.declared.as_ref())
    }

    /// Search the documentation for `keyword`.
    ///
    /// Zero hits is a successful outcome; its display form is the
    /// "no search results" message.
    pub async fn search(
        &self,
        keyword: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResults> {
        let url = self.rules.build_search_url(keyword);
        async {
            debug!(phase = %ResolutionPhase::Searching, %url);
            let body = until_cancelled(cancel, self.search.fetch(&url)).await?;
            ensure_not_cancelled(cancel)?;

            let hits = parse_search_results(&PrototypeExtractor::new(&self.rules), &body)?;
            let results = SearchResults::new(keyword, hits);
            if results.is_empty() {
                info!("{}", results);
            } else {
                debug!(count = results.len(), "search results");
            }
            Ok::<_, ResolveError>(results)
        }
        .instrument(info_span!("search", keyword))
        .await
    }

    /// Resolve the function declared on the page at `url`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Unresolvable`] when the page has no usable
    ///   fragments, does not describe a function, or its prototype does not
    ///   parse
    /// - [`ResolveError::Network`] on collaborator failure
    /// - [`ResolveError::Cancelled`] when `cancel` fires before the entry is built
    pub async fn resolve(&self, url: &str, cancel: &CancellationToken) -> Result<ResolvedEntry> {
        let outcome = self
            .resolve_inner(url, cancel)
            .instrument(info_span!("resolve", url))
            .await;

        match &outcome {
            Ok(entry) => debug!(phase = %ResolutionPhase::Resolved, name = %entry.name),
            Err(e) if e.is_cancelled() => debug!("resolution cancelled"),
            Err(e) => debug!(phase = %ResolutionPhase::Failed, error = %e),
        }
        outcome
    }

    async fn resolve_inner(&self, url: &str, cancel: &CancellationToken) -> Result<ResolvedEntry> {
        debug!(phase = %ResolutionPhase::Extracting);
        let fragments = until_cancelled(cancel, self.pages.extract(url, self.rules.selectors()))
            .await?
            .filter(|f| {
                !f.kind_text.trim().is_empty()
                    && !f.prototype.trim().is_empty()
                    && !f.module.trim().is_empty()
            })
            .ok_or_else(|| ResolveError::unresolvable(url, ResolutionPhase::Extracting))?;
        ensure_not_cancelled(cancel)?;

        let extractor = PrototypeExtractor::new(&self.rules);
        let prototype = {
            let _span = debug_span!("parse", phase = %ResolutionPhase::Parsing).entered();
            let kind = extractor
                .extract_kind_label(&fragments.kind_text)
                .map(|label| self.rules.classify_kind(&label))
                .unwrap_or(PrototypeKind::None);
            if kind != PrototypeKind::Function {
                debug!(
                    kind = kind.display_name(),
                    supported = kind.is_supported(),
                    "not a function page"
                );
                return Err(ResolveError::unresolvable(url, ResolutionPhase::Parsing));
            }

            extractor
                .parse_function(&fragments.prototype)
                .ok_or_else(|| ResolveError::unresolvable(url, ResolutionPhase::Parsing))?
        };

        let _span = debug_span!("classify", phase = %ResolutionPhase::Classifying).entered();
        ensure_not_cancelled(cancel)?;
        Ok(assemble_entry(
            &extractor,
            &self.mapper(),
            prototype,
            &fragments.module,
            url,
        ))
    }
}
