use indoc::indoc;
use pretty_assertions::assert_eq;
use protomap::core::ResolvedSlot;
use protomap::io::{MemoryPageExtractor, MemorySearchService, PageExtractor, PageFragments, PageSelectors};
use protomap::observability::ResolutionPhase;
use protomap::{
    BaseType, PointerWidth, PrototypeKind, ReferenceKind, ResolveError, Resolver, RuleSet,
    StringEncoding, TargetType, TransportError,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const CREATE_FILE_URL: &str = "https://learn.microsoft.com/en-us/windows/win32/api/fileapi/nf-fileapi-createfilew";

const CREATE_FILE: &str = indoc! {"
    HANDLE CreateFileW(
      [in]           LPCWSTR               lpFileName,
      [in]           DWORD                 dwDesiredAccess,
      [in]           DWORD                 dwShareMode,
      [in, optional] LPSECURITY_ATTRIBUTES lpSecurityAttributes,
      [in]           DWORD                 dwCreationDisposition,
      [in]           DWORD                 dwFlagsAndAttributes,
      [in, optional] HANDLE                hTemplateFile
    );
"};

fn resolver(pages: MemoryPageExtractor) -> Resolver<MemorySearchService, MemoryPageExtractor> {
    Resolver::new(Arc::new(RuleSet::default()), MemorySearchService::new(), pages)
        .with_pointer_width(PointerWidth::Bits64)
}

fn slot<'a>(slots: &'a [ResolvedSlot], name: &str) -> &'a ResolvedSlot {
    slots
        .iter()
        .find(|slot| slot.name.as_deref() == Some(name))
        .unwrap()
}

#[tokio::test]
async fn test_resolve_function_page() {
    let pages = MemoryPageExtractor::new().with_page(
        CREATE_FILE_URL,
        "CreateFileW function (fileapi.h)",
        CREATE_FILE,
        " Kernel32.dll ",
    );

    let entry = resolver(pages)
        .resolve(CREATE_FILE_URL, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(entry.name, "CreateFileW");
    assert_eq!(entry.kind, PrototypeKind::Function);
    assert_eq!(entry.owning_module, "Kernel32.dll");
    assert_eq!(entry.source_url, CREATE_FILE_URL);
    assert_eq!(entry.slots.len(), 8);

    let ret = entry.return_slot().unwrap();
    assert!(ret.is_return());
    assert_eq!(ret.target, TargetType::Primitive(BaseType::IntPtr));

    let file_name = slot(&entry.slots, "lpFileName");
    assert_eq!(file_name.target, TargetType::Primitive(BaseType::String));
    assert_eq!(file_name.qualifier.string_encoding, StringEncoding::Unicode);
    assert_eq!(file_name.qualifier.reference_kind, ReferenceKind::In);

    let template = slot(&entry.slots, "hTemplateFile");
    assert!(template.is_optional);

    // LPSECURITY_ATTRIBUTES names a struct, which the catalog does not know
    assert_eq!(entry.unresolved_tokens(), vec!["LPSECURITY_ATTRIBUTES"]);
}

#[tokio::test]
async fn test_non_function_page_is_unresolvable() {
    let pages = MemoryPageExtractor::new().with_page(
        "https://docs/rect",
        "RECT structure (windef.h)",
        "typedef struct tagRECT { LONG left; } RECT;",
        "n/a",
    );

    let error = resolver(pages)
        .resolve("https://docs/rect", &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(
        error,
        ResolveError::unresolvable("https://docs/rect", ResolutionPhase::Parsing)
    );
}

#[tokio::test]
async fn test_missing_page_is_unresolvable() {
    let error = resolver(MemoryPageExtractor::new())
        .resolve("https://docs/missing", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ResolveError::Unresolvable {
            phase: ResolutionPhase::Extracting,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unparseable_prototype_is_unresolvable() {
    let pages = MemoryPageExtractor::new().with_page(
        "https://docs/printf",
        "printf function (stdio.h)",
        "int printf(const char *format, ...);",
        "msvcrt.dll",
    );

    let error = resolver(pages)
        .resolve("https://docs/printf", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(error, ResolveError::Unresolvable { .. }));
}

#[tokio::test]
async fn test_cancelled_before_extraction() {
    let pages = MemoryPageExtractor::new().with_page(
        CREATE_FILE_URL,
        "CreateFileW function (fileapi.h)",
        CREATE_FILE,
        "Kernel32.dll",
    );
    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = resolver(pages)
        .resolve(CREATE_FILE_URL, &cancel)
        .await
        .unwrap_err();
    assert!(error.is_cancelled());
}

/// Page extractor that cancels the session while "downloading".
struct CancellingPages {
    inner: MemoryPageExtractor,
    cancel: CancellationToken,
}

impl PageExtractor for CancellingPages {
    async fn extract(
        &self,
        url: &str,
        selectors: PageSelectors<'_>,
    ) -> Result<Option<PageFragments>, TransportError> {
        let page = self.inner.extract(url, selectors).await;
        self.cancel.cancel();
        page
    }
}

#[tokio::test]
async fn test_cancellation_after_io_discards_entry() {
    let cancel = CancellationToken::new();
    let pages = CancellingPages {
        inner: MemoryPageExtractor::new().with_page(
            CREATE_FILE_URL,
            "CreateFileW function (fileapi.h)",
            CREATE_FILE,
            "Kernel32.dll",
        ),
        cancel: cancel.clone(),
    };
    let resolver = Resolver::new(Arc::new(RuleSet::default()), MemorySearchService::new(), pages);

    let outcome = resolver.resolve(CREATE_FILE_URL, &cancel).await;
    assert_eq!(outcome, Err(ResolveError::Cancelled));
}

#[tokio::test]
async fn test_search_dedupes_and_keeps_order() {
    let rules = RuleSet::default();
    let url = rules.build_search_url("CreateFile");
    let body = json!({
        "results": [
            { "title": "CreateFileW function (fileapi.h)", "url": "https://docs/w" },
            { "title": "CreateFileW function (fileapi.h) - Win32 apps", "url": "https://docs/w" },
            { "title": "CreateFileA function (fileapi.h)", "url": "https://docs/a" },
            { "title": "CreateFileA function (fileapi.h)", "url": "https://docs/a2" },
            { "title": "CreateFile2 function (fileapi.h)", "url": "not a url" },
        ]
    });
    let search = MemorySearchService::new().with_response(url, body.to_string());
    let resolver = Resolver::new(Arc::new(rules), search, MemoryPageExtractor::new());

    let hits = resolver
        .search("CreateFile", &CancellationToken::new())
        .await
        .unwrap();
    let urls: Vec<&str> = hits.iter().map(|hit| hit.url.as_str()).collect();
    assert_eq!(urls, vec!["https://docs/w", "https://docs/a"]);
    assert_eq!(hits[1].title, "CreateFileA function (fileapi.h)");
}

#[tokio::test]
async fn test_search_failures_are_typed() {
    let rules = RuleSet::default();
    let broken_url = rules.build_search_url("Broken");
    let down_url = rules.build_search_url("Down");
    let search = MemorySearchService::new()
        .with_response(broken_url, "<html>moved</html>")
        .with_failure(down_url, TransportError::network("connection refused"));
    let resolver = Resolver::new(Arc::new(rules), search, MemoryPageExtractor::new());
    let cancel = CancellationToken::new();

    assert_eq!(
        resolver.search("Broken", &cancel).await,
        Err(ResolveError::SearchUnavailable)
    );
    assert_eq!(
        resolver.search("Down", &cancel).await,
        Err(ResolveError::Network("connection refused".into()))
    );
}

#[tokio::test]
async fn test_search_without_hits_reports_message() {
    let rules = RuleSet::default();
    let url = rules.build_search_url("Nothing");
    let search = MemorySearchService::new().with_response(url, json!({ "results": [] }).to_string());
    let resolver = Resolver::new(Arc::new(rules), search, MemoryPageExtractor::new());

    let results = resolver
        .search("Nothing", &CancellationToken::new())
        .await
        .unwrap();
    assert!(results.is_empty());
    assert_eq!(results.to_string(), "No search results found for \"Nothing\"");
}

#[tokio::test]
async fn test_bypass_and_declared_types() {
    let rules = RuleSet::from_value(&json!({
        "sharp_type_map": { "LPSECURITY_ATTRIBUTES": "ref SECURITY_ATTRIBUTES" }
    }));
    let declared: HashSet<String> = ["SECURITY_ATTRIBUTES".to_string()].into_iter().collect();
    let pages = MemoryPageExtractor::new().with_page(
        CREATE_FILE_URL,
        "CreateFileW function (fileapi.h)",
        CREATE_FILE,
        "Kernel32.dll",
    );
    let resolver = Resolver::new(Arc::new(rules), MemorySearchService::new(), pages)
        .with_declared_types(Arc::new(declared));

    let entry = resolver
        .resolve(CREATE_FILE_URL, &CancellationToken::new())
        .await
        .unwrap();
    let attributes = slot(&entry.slots, "lpSecurityAttributes");
    assert_eq!(
        attributes.target,
        TargetType::Named("SECURITY_ATTRIBUTES".into())
    );
    assert_eq!(attributes.qualifier.reference_kind, ReferenceKind::In);
    assert!(entry.unresolved_tokens().is_empty());
}

#[test]
fn test_unannotated_pointer_parameters_keep_indirection() {
    let rules = RuleSet::default();
    let entry = protomap::commands::parse_prototype(
        &rules,
        "void Demo(void* p, int* q, [out] int* r)",
        PointerWidth::Bits64,
        "demo.dll",
        "demo.h",
    )
    .unwrap();

    let p = slot(entry.parameters(), "p");
    assert_eq!(p.target, TargetType::Primitive(BaseType::Void));
    assert_eq!(p.qualifier.pointer_level, 1);
    assert_eq!(p.qualifier.reference_kind, ReferenceKind::None);

    let q = slot(entry.parameters(), "q");
    assert_eq!(q.target, TargetType::Primitive(BaseType::Int32));
    assert_eq!(q.qualifier.pointer_level, 1);
    assert_eq!(q.qualifier.reference_kind, ReferenceKind::None);

    let r = slot(entry.parameters(), "r");
    assert_eq!(r.target, TargetType::Primitive(BaseType::Int32));
    assert_eq!(r.qualifier.pointer_level, 0);
    assert_eq!(r.qualifier.reference_kind, ReferenceKind::Out);
}

#[test]
fn test_char_pointer_return_keeps_indirection() {
    let rules = RuleSet::default();
    let entry = protomap::commands::parse_prototype(
        &rules,
        "char *GetCommandLineA(void);",
        PointerWidth::Bits64,
        "Kernel32.dll",
        "processenv.h",
    )
    .unwrap();

    let ret = entry.return_slot().unwrap();
    assert_eq!(ret.target, TargetType::Primitive(BaseType::Int8));
    assert_eq!(ret.qualifier.pointer_level, 1);
    assert!(entry.parameters().is_empty());
}
