//! Shared fixtures for the wire-level tests: a scriptable in-memory
//! engine, a blocking client that speaks the worker's HTTP framing, and a
//! harness pairing one served connection with one client request.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use prost::Message;

use ida_worker::engine::{
    AnalysisEngine, AutoStatus, DataRef, DisasmLine, EngineError, EnumDef, EnumSummary, Export,
    FlutterReport, FuncInfo, Function, Global, Il2CppReport, Import, OpenStatus, Segment,
    StringItem, StringXref, StructDef, StructSummary, TypeInfo, Xref,
};
use ida_worker::{Server, Session};

/// Observable state behind [`MockEngine`]. Tests pre-load results and
/// inspect recorded calls through a shared handle.
pub struct MockState {
    /// Consumed front-to-back by open calls; empty means `Opened`.
    pub open_results: VecDeque<OpenStatus>,
    /// The `auto_analyze` flag of each open call, in order.
    pub open_calls: Vec<bool>,
    pub close_calls: u32,
    pub decompiler: bool,
    pub dirty: bool,
    pub save_result: bool,
    pub close_result: bool,
    pub plan_error: Option<String>,
    pub strings: Vec<StringItem>,
    pub names: HashMap<u64, String>,
    /// Keyed by `(address, repeatable)`; the two comment kinds never mix.
    pub comments: HashMap<(u64, bool), String>,
    pub min_addr: u64,
    pub max_addr: u64,
    /// `(start, end, pattern, search_up)` of each binary search.
    pub find_calls: Vec<(u64, u64, String, bool)>,
    pub find_result: Vec<u64>,
}

impl Default for MockState {
    fn default() -> MockState {
        MockState {
            open_results: VecDeque::new(),
            open_calls: Vec::new(),
            close_calls: 0,
            decompiler: false,
            dirty: false,
            save_result: true,
            close_result: true,
            plan_error: None,
            strings: Vec::new(),
            names: HashMap::new(),
            comments: HashMap::new(),
            min_addr: 0x1000,
            max_addr: 0x9000,
            find_calls: Vec::new(),
            find_result: Vec::new(),
        }
    }
}

pub struct MockEngine(Rc<RefCell<MockState>>);

impl MockEngine {
    pub fn new() -> (MockEngine, Rc<RefCell<MockState>>) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (MockEngine(state.clone()), state)
    }
}

fn unscripted<T>() -> Result<T, EngineError> {
    Err(EngineError::Operation("not scripted".to_string()))
}

impl AnalysisEngine for MockEngine {
    fn open_database(&mut self, _path: &Path, auto_analyze: bool) -> OpenStatus {
        let mut state = self.0.borrow_mut();
        state.open_calls.push(auto_analyze);
        state.open_results.pop_front().unwrap_or(OpenStatus::Opened)
    }
    fn init_decompiler(&mut self) -> bool {
        self.0.borrow().decompiler
    }
    fn is_dirty(&self) -> bool {
        self.0.borrow().dirty
    }
    fn save_database(&mut self) -> bool {
        self.0.borrow().save_result
    }
    fn close_database(&mut self, _save: bool) -> bool {
        let mut state = self.0.borrow_mut();
        state.close_calls += 1;
        state.close_result
    }
    fn plan_and_wait(&mut self) -> Result<(), EngineError> {
        match self.0.borrow().plan_error.clone() {
            None => Ok(()),
            Some(msg) => Err(EngineError::Operation(msg)),
        }
    }
    fn auto_status(&self) -> Option<AutoStatus> {
        None
    }
    fn min_address(&self) -> u64 {
        self.0.borrow().min_addr
    }
    fn max_address(&self) -> u64 {
        self.0.borrow().max_addr
    }
    fn bytes_at(&mut self, _address: u64, size: usize) -> Result<Vec<u8>, EngineError> {
        Ok(vec![0x90; size])
    }
    fn disasm_at(&mut self, _address: u64) -> Result<String, EngineError> {
        unscripted()
    }
    fn function_disasm(&mut self, _address: u64) -> Result<Vec<DisasmLine>, EngineError> {
        unscripted()
    }
    fn decompile(&mut self, _address: u64) -> Result<String, EngineError> {
        unscripted()
    }
    fn function_name(&mut self, address: u64) -> Result<String, EngineError> {
        self.name_at(address)
    }
    fn dword_at(&mut self, _address: u64) -> Result<u32, EngineError> {
        unscripted()
    }
    fn qword_at(&mut self, _address: u64) -> Result<u64, EngineError> {
        unscripted()
    }
    fn instruction_length(&mut self, _address: u64) -> Result<u32, EngineError> {
        unscripted()
    }
    fn read_cstring(&mut self, _address: u64, _max_length: usize) -> Result<String, EngineError> {
        unscripted()
    }
    fn byte_at(&mut self, _address: u64) -> Result<u8, EngineError> {
        unscripted()
    }
    fn segments(&mut self) -> Result<Vec<Segment>, EngineError> {
        unscripted()
    }
    fn functions(&mut self) -> Result<Vec<Function>, EngineError> {
        unscripted()
    }
    fn imports(&mut self) -> Result<Vec<Import>, EngineError> {
        unscripted()
    }
    fn exports(&mut self) -> Result<Vec<Export>, EngineError> {
        unscripted()
    }
    fn entry_point(&mut self) -> Result<u64, EngineError> {
        unscripted()
    }
    fn strings(&mut self) -> Result<Vec<StringItem>, EngineError> {
        Ok(self.0.borrow().strings.clone())
    }
    fn xrefs_to(&mut self, _address: u64) -> Result<Vec<Xref>, EngineError> {
        unscripted()
    }
    fn xrefs_from(&mut self, _address: u64) -> Result<Vec<Xref>, EngineError> {
        unscripted()
    }
    fn data_refs(&mut self, _address: u64) -> Result<Vec<DataRef>, EngineError> {
        unscripted()
    }
    fn string_xrefs(&mut self, _address: u64) -> Result<Vec<StringXref>, EngineError> {
        unscripted()
    }
    fn set_comment(
        &mut self,
        address: u64,
        comment: &str,
        repeatable: bool,
    ) -> Result<bool, EngineError> {
        self.0
            .borrow_mut()
            .comments
            .insert((address, repeatable), comment.to_string());
        Ok(true)
    }
    fn comment_at(&mut self, address: u64, repeatable: bool) -> Result<String, EngineError> {
        Ok(self
            .0
            .borrow()
            .comments
            .get(&(address, repeatable))
            .cloned()
            .unwrap_or_default())
    }
    fn set_func_comment(&mut self, _address: u64, _comment: &str) -> Result<bool, EngineError> {
        unscripted()
    }
    fn func_comment_at(&mut self, _address: u64) -> Result<String, EngineError> {
        unscripted()
    }
    fn set_decompiler_comment(
        &mut self,
        _function_address: u64,
        _address: u64,
        _comment: &str,
    ) -> Result<bool, EngineError> {
        unscripted()
    }
    fn set_name(&mut self, address: u64, name: &str) -> Result<bool, EngineError> {
        self.0.borrow_mut().names.insert(address, name.to_string());
        Ok(true)
    }
    fn name_at(&mut self, address: u64) -> Result<String, EngineError> {
        Ok(self
            .0
            .borrow()
            .names
            .get(&address)
            .cloned()
            .unwrap_or_default())
    }
    fn delete_name(&mut self, address: u64) -> Result<bool, EngineError> {
        Ok(self.0.borrow_mut().names.remove(&address).is_some())
    }
    fn make_function(&mut self, _address: u64) -> Result<bool, EngineError> {
        unscripted()
    }
    fn set_function_type(&mut self, _address: u64, _prototype: &str) -> Result<bool, EngineError> {
        unscripted()
    }
    fn set_lvar_type(
        &mut self,
        _function_address: u64,
        _lvar_name: &str,
        _lvar_type: &str,
    ) -> Result<bool, EngineError> {
        unscripted()
    }
    fn rename_lvar(
        &mut self,
        _function_address: u64,
        _lvar_name: &str,
        _new_name: &str,
    ) -> Result<bool, EngineError> {
        unscripted()
    }
    fn globals(&mut self) -> Result<Vec<Global>, EngineError> {
        unscripted()
    }
    fn set_global_type(&mut self, _address: u64, _ty: &str) -> Result<bool, EngineError> {
        unscripted()
    }
    fn rename_global(&mut self, _address: u64, _new_name: &str) -> Result<bool, EngineError> {
        unscripted()
    }
    fn list_structs(&mut self) -> Result<Vec<StructSummary>, EngineError> {
        unscripted()
    }
    fn get_struct(&mut self, _name: &str) -> Result<StructDef, EngineError> {
        unscripted()
    }
    fn list_enums(&mut self) -> Result<Vec<EnumSummary>, EngineError> {
        unscripted()
    }
    fn get_enum(&mut self, _name: &str) -> Result<EnumDef, EngineError> {
        unscripted()
    }
    fn function_info(&mut self, _address: u64) -> Result<FuncInfo, EngineError> {
        unscripted()
    }
    fn type_at(&mut self, _address: u64) -> Result<TypeInfo, EngineError> {
        unscripted()
    }
    fn find_binary(
        &mut self,
        start: u64,
        end: u64,
        pattern: &str,
        search_up: bool,
    ) -> Result<Vec<u64>, EngineError> {
        let mut state = self.0.borrow_mut();
        state
            .find_calls
            .push((start, end, pattern.to_string(), search_up));
        Ok(state.find_result.clone())
    }
    fn find_text(
        &mut self,
        _start: u64,
        _end: u64,
        _needle: &str,
        _case_sensitive: bool,
        _unicode: bool,
    ) -> Result<Vec<u64>, EngineError> {
        unscripted()
    }
    fn import_il2cpp(
        &mut self,
        _script_json: &str,
        _header: &str,
        _fields: &[String],
    ) -> Result<Il2CppReport, EngineError> {
        unscripted()
    }
    fn import_flutter(&mut self, _blutter_output_path: &Path) -> Result<FlutterReport, EngineError> {
        unscripted()
    }
}

#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("text body")
    }

    pub fn decode<M: Message + Default>(&self) -> M {
        assert_eq!(
            self.status,
            200,
            "expected success, got {}: {}",
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        assert_eq!(self.content_type, "application/proto");
        M::decode(self.body.as_slice()).expect("decode response body")
    }
}

/// Send one request over a fresh connection and read the full response.
/// Blocking by design; tests run this on a plain thread.
pub fn request(socket: &Path, path: &str, body: &[u8]) -> Response {
    let mut stream = UnixStream::connect(socket).expect("connect to worker socket");
    let head = format!(
        "POST {path} HTTP/1.1\r\nHost: unix\r\nContent-Type: application/proto\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes()).expect("write head");
    stream.write_all(body).expect("write body");
    stream.shutdown(Shutdown::Write).expect("shutdown write half");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).expect("read response");
    parse_response(&raw)
}

fn parse_response(raw: &[u8]) -> Response {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| i + 4)
        .expect("response has no header terminator");
    let head = std::str::from_utf8(&raw[..end]).expect("header block is utf8");
    let status: u16 = head
        .split_whitespace()
        .nth(1)
        .expect("status code")
        .parse()
        .expect("numeric status");
    let content_type = head
        .split("\r\n")
        .find_map(|line| line.strip_prefix("Content-Type: "))
        .unwrap_or_default()
        .to_string();
    let content_length: usize = head
        .split("\r\n")
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .expect("content length header")
        .parse()
        .expect("numeric content length");
    let body = raw[end..].to_vec();
    assert_eq!(body.len(), content_length, "body does not match declared length");
    Response {
        status,
        content_type,
        body,
    }
}

/// One worker under test: bound socket, session with a [`MockEngine`],
/// and the state handle for scripting and inspection.
pub struct TestWorker {
    pub dir: tempfile::TempDir,
    pub socket: PathBuf,
    pub binary: PathBuf,
    pub session: Session,
    pub state: Rc<RefCell<MockState>>,
    pub server: Server,
}

impl TestWorker {
    pub async fn call(&mut self, path: &str, body: Vec<u8>) -> Response {
        let socket = self.socket.clone();
        let path = path.to_string();
        let client = std::thread::spawn(move || request(&socket, &path, &body));
        self.server
            .serve_one(&mut self.session)
            .await
            .expect("serve_one");
        client.join().expect("client thread")
    }
}

/// Must be called from within a tokio runtime; the listener registers
/// with the active reactor.
pub fn worker() -> TestWorker {
    let dir = tempfile::tempdir().expect("tempdir");
    let socket = dir.path().join("worker.sock");
    let binary = dir.path().join("target.bin");
    std::fs::write(&binary, b"\x7fELF\x02\x01\x01").expect("write binary");
    let (engine, state) = MockEngine::new();
    let session = Session::new(binary.clone(), "itest".to_string(), Box::new(engine));
    let server = Server::bind(&socket).expect("bind worker socket");
    TestWorker {
        dir,
        socket,
        binary,
        session,
        state,
        server,
    }
}
