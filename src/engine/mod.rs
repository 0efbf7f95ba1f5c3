//! The analysis-engine boundary.
//!
//! The worker never implements disassembly, decompilation, or database
//! internals itself; everything below the session layer goes through
//! [`AnalysisEngine`]. The shipped binary plugs in [`stub::StubEngine`],
//! which is enough to exercise the protocol end to end; real backends
//! implement this trait out of tree.

use std::path::Path;

use thiserror::Error;

pub mod stub;

/// Failure at the engine boundary. Handlers forward the message verbatim
/// to the client.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The backend attempted the operation and rejected it.
    #[error("{0}")]
    Operation(String),

    /// A decompiler-backed call was made without a decompiler.
    #[error("Decompiler not available")]
    NoDecompiler,

    /// The backend does not carry this capability at all.
    #[error("{0} requires an analysis backend")]
    Unsupported(&'static str),
}

/// Result of an open attempt, mirroring the backend's numeric status
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Opened,
    FileNotFound,
    DatabaseFormat,
    Architecture,
    Corrupt,
    Other(i32),
}

impl OpenStatus {
    pub fn from_code(code: i32) -> OpenStatus {
        match code {
            0 => OpenStatus::Opened,
            -1 => OpenStatus::FileNotFound,
            1 => OpenStatus::DatabaseFormat,
            2 => OpenStatus::Architecture,
            4 => OpenStatus::Corrupt,
            other => OpenStatus::Other(other),
        }
    }

    /// Statuses that trigger artifact cleanup and a single retry with
    /// auto-analysis forced on.
    pub fn is_corruption(&self) -> bool {
        matches!(self, OpenStatus::DatabaseFormat | OpenStatus::Corrupt)
    }

    /// Operator-facing message for a failed open.
    pub fn message(&self) -> String {
        match self {
            OpenStatus::Opened => "ok".to_string(),
            OpenStatus::FileNotFound => "File not found or cannot be opened".to_string(),
            OpenStatus::DatabaseFormat => "Database format error".to_string(),
            OpenStatus::Architecture => "Architecture not supported".to_string(),
            OpenStatus::Corrupt => "Database already exists or corrupted".to_string(),
            OpenStatus::Other(code) => format!("Failed to open database (code {code})"),
        }
    }
}

/// Auto-analysis state as reported by the backend itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoStatus {
    pub running: bool,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: u64,
    pub end: u64,
    pub name: String,
    pub class: String,
    pub permissions: u32,
    pub bitness: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub address: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module: String,
    pub address: u64,
    pub name: String,
    pub ordinal: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub index: u32,
    pub ordinal: u32,
    pub address: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringItem {
    pub address: u64,
    pub value: String,
}

/// One line of a function listing; rendering is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasmLine {
    pub address: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xref {
    pub from: u64,
    pub to: u64,
    pub kind: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRef {
    pub from: u64,
    pub kind: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringXref {
    pub address: u64,
    pub function_address: u64,
    pub function_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    pub address: u64,
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructSummary {
    pub name: String,
    pub id: u32,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub name: String,
    pub offset: u64,
    pub size: u64,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub id: u32,
    pub size: u64,
    pub members: Vec<StructMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumSummary {
    pub name: String,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub id: u32,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuncFlags {
    pub is_library: bool,
    pub is_thunk: bool,
    pub no_return: bool,
    pub has_farseg: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncInfo {
    pub address: u64,
    pub name: String,
    pub start: u64,
    pub end: u64,
    pub size: u64,
    pub frame_size: u64,
    pub flags: FuncFlags,
    pub calling_convention: String,
    pub return_type: String,
    pub num_args: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub ty: String,
    pub size: u64,
    pub is_ptr: bool,
    pub is_func: bool,
    pub is_array: bool,
    pub is_struct: bool,
    pub is_union: bool,
    pub is_enum: bool,
    pub has_type: bool,
}

/// Counters from an IL2CPP metadata import.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Il2CppReport {
    pub functions_defined: u32,
    pub functions_named: u32,
    pub strings_named: u32,
    pub metadata_named: u32,
    pub metadata_methods: u32,
    pub signatures_applied: u32,
    /// Non-fatal header parse problems; the import still counts as
    /// successful.
    pub error: Option<String>,
}

/// Counters from a blutter (Flutter/Dart) output import.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlutterReport {
    pub functions_created: u32,
    pub functions_named: u32,
}

/// The backend contract.
///
/// Lifecycle calls use plain returns because backends only report coarse
/// success for them; every analysis operation returns `Result` so rejection
/// messages can travel to the client. All methods may block; the worker's
/// sequential model expects that.
pub trait AnalysisEngine {
    // Lifecycle.
    fn open_database(&mut self, path: &Path, auto_analyze: bool) -> OpenStatus;
    fn init_decompiler(&mut self) -> bool;
    fn is_dirty(&self) -> bool;
    fn save_database(&mut self) -> bool;
    fn close_database(&mut self, save: bool) -> bool;
    fn plan_and_wait(&mut self) -> Result<(), EngineError>;
    /// Backend-reported auto-analysis state, if the backend can report
    /// one. `None` makes the session fall back to its own tracking.
    fn auto_status(&self) -> Option<AutoStatus>;

    // Address space.
    fn min_address(&self) -> u64;
    fn max_address(&self) -> u64;

    // Memory and code reads.
    fn bytes_at(&mut self, address: u64, size: usize) -> Result<Vec<u8>, EngineError>;
    fn disasm_at(&mut self, address: u64) -> Result<String, EngineError>;
    fn function_disasm(&mut self, address: u64) -> Result<Vec<DisasmLine>, EngineError>;
    fn decompile(&mut self, address: u64) -> Result<String, EngineError>;
    fn function_name(&mut self, address: u64) -> Result<String, EngineError>;
    fn dword_at(&mut self, address: u64) -> Result<u32, EngineError>;
    fn qword_at(&mut self, address: u64) -> Result<u64, EngineError>;
    fn instruction_length(&mut self, address: u64) -> Result<u32, EngineError>;
    fn read_cstring(&mut self, address: u64, max_length: usize) -> Result<String, EngineError>;
    fn byte_at(&mut self, address: u64) -> Result<u8, EngineError>;

    // Listings.
    fn segments(&mut self) -> Result<Vec<Segment>, EngineError>;
    fn functions(&mut self) -> Result<Vec<Function>, EngineError>;
    fn imports(&mut self) -> Result<Vec<Import>, EngineError>;
    fn exports(&mut self) -> Result<Vec<Export>, EngineError>;
    fn entry_point(&mut self) -> Result<u64, EngineError>;
    fn strings(&mut self) -> Result<Vec<StringItem>, EngineError>;

    // Cross references.
    fn xrefs_to(&mut self, address: u64) -> Result<Vec<Xref>, EngineError>;
    fn xrefs_from(&mut self, address: u64) -> Result<Vec<Xref>, EngineError>;
    fn data_refs(&mut self, address: u64) -> Result<Vec<DataRef>, EngineError>;
    fn string_xrefs(&mut self, address: u64) -> Result<Vec<StringXref>, EngineError>;

    // Annotation and naming. Repeatable and regular comments are distinct
    // namespaces; the flag selects which one an operation touches.
    fn set_comment(
        &mut self,
        address: u64,
        comment: &str,
        repeatable: bool,
    ) -> Result<bool, EngineError>;
    fn comment_at(&mut self, address: u64, repeatable: bool) -> Result<String, EngineError>;
    fn set_func_comment(&mut self, address: u64, comment: &str) -> Result<bool, EngineError>;
    fn func_comment_at(&mut self, address: u64) -> Result<String, EngineError>;
    fn set_decompiler_comment(
        &mut self,
        function_address: u64,
        address: u64,
        comment: &str,
    ) -> Result<bool, EngineError>;
    fn set_name(&mut self, address: u64, name: &str) -> Result<bool, EngineError>;
    fn name_at(&mut self, address: u64) -> Result<String, EngineError>;
    fn delete_name(&mut self, address: u64) -> Result<bool, EngineError>;
    fn make_function(&mut self, address: u64) -> Result<bool, EngineError>;

    // Types.
    fn set_function_type(&mut self, address: u64, prototype: &str) -> Result<bool, EngineError>;
    fn set_lvar_type(
        &mut self,
        function_address: u64,
        lvar_name: &str,
        lvar_type: &str,
    ) -> Result<bool, EngineError>;
    fn rename_lvar(
        &mut self,
        function_address: u64,
        lvar_name: &str,
        new_name: &str,
    ) -> Result<bool, EngineError>;
    fn globals(&mut self) -> Result<Vec<Global>, EngineError>;
    fn set_global_type(&mut self, address: u64, ty: &str) -> Result<bool, EngineError>;
    fn rename_global(&mut self, address: u64, new_name: &str) -> Result<bool, EngineError>;
    fn list_structs(&mut self) -> Result<Vec<StructSummary>, EngineError>;
    fn get_struct(&mut self, name: &str) -> Result<StructDef, EngineError>;
    fn list_enums(&mut self) -> Result<Vec<EnumSummary>, EngineError>;
    fn get_enum(&mut self, name: &str) -> Result<EnumDef, EngineError>;
    fn function_info(&mut self, address: u64) -> Result<FuncInfo, EngineError>;
    fn type_at(&mut self, address: u64) -> Result<TypeInfo, EngineError>;

    // Search.
    fn find_binary(
        &mut self,
        start: u64,
        end: u64,
        pattern: &str,
        search_up: bool,
    ) -> Result<Vec<u64>, EngineError>;
    fn find_text(
        &mut self,
        start: u64,
        end: u64,
        needle: &str,
        case_sensitive: bool,
        unicode: bool,
    ) -> Result<Vec<u64>, EngineError>;

    // Bulk metadata import.
    fn import_il2cpp(
        &mut self,
        script_json: &str,
        header: &str,
        fields: &[String],
    ) -> Result<Il2CppReport, EngineError>;
    fn import_flutter(&mut self, blutter_output_path: &Path) -> Result<FlutterReport, EngineError>;
}
