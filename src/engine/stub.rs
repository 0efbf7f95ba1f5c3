//! The backend compiled into the shipped binary.
//!
//! Lifecycle calls succeed so session management, routing, and the wire
//! surface can be exercised on any machine; analysis calls report that no
//! backend is present. A real disassembler backend replaces this by
//! implementing [`AnalysisEngine`].

use std::path::Path;

use super::{
    AnalysisEngine, AutoStatus, DataRef, DisasmLine, EngineError, EnumDef, EnumSummary, Export,
    FlutterReport, FuncInfo, Function, Global, Il2CppReport, Import, OpenStatus, Segment,
    StringItem, StringXref, StructDef, StructSummary, TypeInfo, Xref,
};

#[derive(Debug, Default)]
pub struct StubEngine {
    open: bool,
}

impl StubEngine {
    pub fn new() -> StubEngine {
        StubEngine::default()
    }
}

fn unsupported<T>(what: &'static str) -> Result<T, EngineError> {
    Err(EngineError::Unsupported(what))
}

impl AnalysisEngine for StubEngine {
    fn open_database(&mut self, _path: &Path, _auto_analyze: bool) -> OpenStatus {
        self.open = true;
        OpenStatus::Opened
    }

    fn init_decompiler(&mut self) -> bool {
        false
    }

    fn is_dirty(&self) -> bool {
        false
    }

    fn save_database(&mut self) -> bool {
        self.open
    }

    fn close_database(&mut self, _save: bool) -> bool {
        self.open = false;
        true
    }

    fn plan_and_wait(&mut self) -> Result<(), EngineError> {
        // Nothing to analyze; completes immediately.
        Ok(())
    }

    fn auto_status(&self) -> Option<AutoStatus> {
        None
    }

    fn min_address(&self) -> u64 {
        0
    }

    fn max_address(&self) -> u64 {
        0
    }

    fn bytes_at(&mut self, _address: u64, _size: usize) -> Result<Vec<u8>, EngineError> {
        unsupported("memory access")
    }

    fn disasm_at(&mut self, _address: u64) -> Result<String, EngineError> {
        unsupported("disassembly")
    }

    fn function_disasm(&mut self, _address: u64) -> Result<Vec<DisasmLine>, EngineError> {
        unsupported("disassembly")
    }

    fn decompile(&mut self, _address: u64) -> Result<String, EngineError> {
        unsupported("decompilation")
    }

    fn function_name(&mut self, _address: u64) -> Result<String, EngineError> {
        unsupported("naming")
    }

    fn dword_at(&mut self, _address: u64) -> Result<u32, EngineError> {
        unsupported("memory access")
    }

    fn qword_at(&mut self, _address: u64) -> Result<u64, EngineError> {
        unsupported("memory access")
    }

    fn instruction_length(&mut self, _address: u64) -> Result<u32, EngineError> {
        unsupported("instruction decoding")
    }

    fn read_cstring(&mut self, _address: u64, _max_length: usize) -> Result<String, EngineError> {
        unsupported("memory access")
    }

    fn byte_at(&mut self, _address: u64) -> Result<u8, EngineError> {
        unsupported("memory access")
    }

    fn segments(&mut self) -> Result<Vec<Segment>, EngineError> {
        unsupported("segment listing")
    }

    fn functions(&mut self) -> Result<Vec<Function>, EngineError> {
        unsupported("function listing")
    }

    fn imports(&mut self) -> Result<Vec<Import>, EngineError> {
        unsupported("import listing")
    }

    fn exports(&mut self) -> Result<Vec<Export>, EngineError> {
        unsupported("export listing")
    }

    fn entry_point(&mut self) -> Result<u64, EngineError> {
        unsupported("entry point lookup")
    }

    fn strings(&mut self) -> Result<Vec<StringItem>, EngineError> {
        unsupported("string listing")
    }

    fn xrefs_to(&mut self, _address: u64) -> Result<Vec<Xref>, EngineError> {
        unsupported("cross-reference listing")
    }

    fn xrefs_from(&mut self, _address: u64) -> Result<Vec<Xref>, EngineError> {
        unsupported("cross-reference listing")
    }

    fn data_refs(&mut self, _address: u64) -> Result<Vec<DataRef>, EngineError> {
        unsupported("cross-reference listing")
    }

    fn string_xrefs(&mut self, _address: u64) -> Result<Vec<StringXref>, EngineError> {
        unsupported("cross-reference listing")
    }

    fn set_comment(
        &mut self,
        _address: u64,
        _comment: &str,
        _repeatable: bool,
    ) -> Result<bool, EngineError> {
        unsupported("annotation")
    }

    fn comment_at(&mut self, _address: u64, _repeatable: bool) -> Result<String, EngineError> {
        unsupported("annotation")
    }

    fn set_func_comment(&mut self, _address: u64, _comment: &str) -> Result<bool, EngineError> {
        unsupported("annotation")
    }

    fn func_comment_at(&mut self, _address: u64) -> Result<String, EngineError> {
        unsupported("annotation")
    }

    fn set_decompiler_comment(
        &mut self,
        _function_address: u64,
        _address: u64,
        _comment: &str,
    ) -> Result<bool, EngineError> {
        unsupported("annotation")
    }

    fn set_name(&mut self, _address: u64, _name: &str) -> Result<bool, EngineError> {
        unsupported("naming")
    }

    fn name_at(&mut self, _address: u64) -> Result<String, EngineError> {
        unsupported("naming")
    }

    fn delete_name(&mut self, _address: u64) -> Result<bool, EngineError> {
        unsupported("naming")
    }

    fn make_function(&mut self, _address: u64) -> Result<bool, EngineError> {
        unsupported("function creation")
    }

    fn set_function_type(&mut self, _address: u64, _prototype: &str) -> Result<bool, EngineError> {
        unsupported("type editing")
    }

    fn set_lvar_type(
        &mut self,
        _function_address: u64,
        _lvar_name: &str,
        _lvar_type: &str,
    ) -> Result<bool, EngineError> {
        unsupported("type editing")
    }

    fn rename_lvar(
        &mut self,
        _function_address: u64,
        _lvar_name: &str,
        _new_name: &str,
    ) -> Result<bool, EngineError> {
        unsupported("local variable editing")
    }

    fn globals(&mut self) -> Result<Vec<Global>, EngineError> {
        unsupported("global listing")
    }

    fn set_global_type(&mut self, _address: u64, _ty: &str) -> Result<bool, EngineError> {
        unsupported("type editing")
    }

    fn rename_global(&mut self, _address: u64, _new_name: &str) -> Result<bool, EngineError> {
        unsupported("naming")
    }

    fn list_structs(&mut self) -> Result<Vec<StructSummary>, EngineError> {
        unsupported("type listing")
    }

    fn get_struct(&mut self, _name: &str) -> Result<StructDef, EngineError> {
        unsupported("type listing")
    }

    fn list_enums(&mut self) -> Result<Vec<EnumSummary>, EngineError> {
        unsupported("type listing")
    }

    fn get_enum(&mut self, _name: &str) -> Result<EnumDef, EngineError> {
        unsupported("type listing")
    }

    fn function_info(&mut self, _address: u64) -> Result<FuncInfo, EngineError> {
        unsupported("function inspection")
    }

    fn type_at(&mut self, _address: u64) -> Result<TypeInfo, EngineError> {
        unsupported("type inspection")
    }

    fn find_binary(
        &mut self,
        _start: u64,
        _end: u64,
        _pattern: &str,
        _search_up: bool,
    ) -> Result<Vec<u64>, EngineError> {
        unsupported("binary search")
    }

    fn find_text(
        &mut self,
        _start: u64,
        _end: u64,
        _needle: &str,
        _case_sensitive: bool,
        _unicode: bool,
    ) -> Result<Vec<u64>, EngineError> {
        unsupported("text search")
    }

    fn import_il2cpp(
        &mut self,
        _script_json: &str,
        _header: &str,
        _fields: &[String],
    ) -> Result<Il2CppReport, EngineError> {
        unsupported("IL2CPP import")
    }

    fn import_flutter(
        &mut self,
        _blutter_output_path: &Path,
    ) -> Result<FlutterReport, EngineError> {
        unsupported("blutter import")
    }
}
