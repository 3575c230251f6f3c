//! Built-in word lists.
//!
//! Both are plain data: the lexer only ever asks "is this exact string in
//! the set", so callers can swap either list through [`crate::config::Config`].

/// Reserved words and contextual names that must never be renamed.
pub const KEYWORDS: &[&str] = &[
    "abstract", "arguments", "async", "await", "boolean", "break", "byte", "case", "catch",
    "char", "class", "const", "constructor", "continue", "debugger", "default", "delete",
    "do", "double", "else", "enum", "export", "extends", "false", "final", "finally",
    "float", "for", "from", "function", "get", "goto", "if", "implements", "import", "in",
    "instanceof", "int", "interface", "let", "long", "native", "new", "null", "of",
    "package", "private", "protected", "public", "return", "set", "short", "static",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "true",
    "try", "typeof", "undefined", "var", "void", "volatile", "while", "with", "yield",
];

/// Names resolved on the ambient scope; rewritten into dynamic lookups.
pub const AMBIENT_NAMES: &[&str] = &[
    // language globals
    "Array", "ArrayBuffer", "BigInt", "Boolean", "DataView", "Date", "Error", "EvalError",
    "Float32Array", "Float64Array", "Function", "Infinity", "Int16Array", "Int32Array",
    "Int8Array", "Intl", "JSON", "Map", "Math", "NaN", "Number", "Object", "Promise", "Proxy",
    "RangeError", "ReferenceError", "Reflect", "RegExp", "Set", "String", "Symbol",
    "SyntaxError", "TypeError", "URIError", "Uint16Array", "Uint32Array", "Uint8Array",
    "Uint8ClampedArray", "WeakMap", "WeakSet", "decodeURI", "decodeURIComponent",
    "encodeURI", "encodeURIComponent", "isFinite", "isNaN", "parseFloat", "parseInt",
    // host globals
    "alert", "atob", "btoa", "cancelAnimationFrame", "clearInterval", "clearTimeout",
    "confirm", "console", "crypto", "customElements", "document", "Event", "EventTarget",
    "fetch", "FormData", "getComputedStyle", "globalThis", "Headers", "history",
    "HTMLElement", "Image", "indexedDB", "innerHeight", "innerWidth", "localStorage",
    "location", "MutationObserver", "navigator", "Node", "performance", "prompt",
    "queueMicrotask", "Request", "requestAnimationFrame", "Response", "screen",
    "sessionStorage", "setInterval", "setTimeout", "structuredClone", "TextDecoder",
    "TextEncoder", "URL", "URLSearchParams", "WebSocket", "window", "Worker",
    "XMLHttpRequest",
];
