use std::collections::HashSet;
use std::sync::LazyLock;

/// Directory names that are never descended into, at any depth.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".next",
    ".nuxt",
    "dist",
    "build",
    ".cache",
    "coverage",
    ".pytest_cache",
    ".mypy_cache",
    "vendor",
    "venv",
    ".venv",
    "env",
    ".env",
    "target",
    "out",
    ".gradle",
    ".idea",
    ".vscode",
    "bower_components",
    ".sass-cache",
    "tmp",
    "temp",
    ".DS_Store",
];

/// Lower-cased file-name suffixes, leading dot included.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".go", ".rs",
    ".rb", ".php", ".swift", ".kt", ".scala", ".sh", ".bash", ".zsh", ".fish", ".sql", ".r", ".m",
    ".mm", ".dart", ".lua", ".pl", ".pm", ".vue", ".svelte", ".astro", ".elm", ".ex", ".exs",
    ".erl", ".clj", ".cljs", ".cljc", ".hs", ".ml", ".fs", ".fsx", ".vb", ".groovy", ".gradle",
    ".cmake", ".yaml", ".yml", ".json", ".toml", ".xml", ".html", ".css", ".scss", ".sass", ".less",
    ".md", ".rst", ".tex",
];

/// Directories whose name starts with this are treated as hidden and pruned.
pub const HIDDEN_MARKER: char = '.';

/// Files strictly larger than this many bytes are skipped.
pub const MAX_FILE_SIZE: u64 = 1_000_000;

pub(crate) static EXCLUDED_DIR_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EXCLUDED_DIRS.iter().copied().collect());

pub(crate) static CODE_EXTENSION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CODE_EXTENSIONS.iter().copied().collect());
