// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (extracting triplets or inspecting a file).
//
// Rules for this layer:
//   - No matching heuristics or regexes here
//   - No UI or printing here (that's Layer 1)
//   - No direct docx/file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The full extraction workflow
pub mod extract_use_case;

// The segmentation-only inspection workflow
pub mod inspect_use_case;
