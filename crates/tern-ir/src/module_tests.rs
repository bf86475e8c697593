use crate::{BinOp, HEADER_SIZE, MAGIC, Module, ModuleError, Node, Ty, VERSION};

fn sample() -> Module {
    Module::new(Node::Let {
        name: "p".into(),
        ty: Ty::Ref(Box::new(Ty::Float)),
        value: Box::new(Node::Alloc(Box::new(Node::Float(0.5)))),
        body: Box::new(Node::Binary {
            op: BinOp::Mul,
            lhs: Box::new(Node::Load(Box::new(Node::Var("p".into())))),
            rhs: Box::new(Node::Float(2.0)),
        }),
    })
}

#[test]
fn header_layout() {
    let bytes = sample().to_bytes().unwrap();

    assert_eq!(&bytes[0..4], &MAGIC);
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), VERSION);
    assert_eq!(&bytes[6..8], &[0, 0]);
    let checksum = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    assert_eq!(checksum, crc32fast::hash(&bytes[HEADER_SIZE..]));
}

#[test]
fn bytes_decode_to_same_module() {
    let module = sample();
    let bytes = module.to_bytes().unwrap();
    assert_eq!(Module::from_bytes(&bytes).unwrap(), module);
}

#[test]
fn rejects_short_input() {
    let err = Module::from_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, ModuleError::FileTooSmall(3)));
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = sample().to_bytes().unwrap();
    bytes[0] = b'X';
    let err = Module::from_bytes(&bytes).unwrap_err();
    assert_eq!(err.to_string(), "invalid magic: expected TERN");
}

#[test]
fn rejects_unknown_version() {
    let mut bytes = sample().to_bytes().unwrap();
    bytes[4..6].copy_from_slice(&99u16.to_le_bytes());
    let err = Module::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ModuleError::UnsupportedVersion(99)));
}

#[test]
fn rejects_corrupted_payload() {
    let mut bytes = sample().to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;
    let err = Module::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ModuleError::ChecksumMismatch { .. }));
}

#[test]
fn json_view_names_variants() {
    let json = sample().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["Let"]["name"], "p");
    assert_eq!(value["Let"]["value"]["Alloc"]["Float"], 0.5);
    assert_eq!(value["Let"]["body"]["Binary"]["op"], "Mul");
}
