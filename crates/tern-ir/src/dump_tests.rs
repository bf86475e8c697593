use crate::{BinOp, CmpOp, Node, NumKind, Param, RecordField, Ty, dump};

fn b(node: Node) -> Box<Node> {
    Box::new(node)
}

#[test]
fn short_node_stays_on_one_line() {
    let node = Node::Let {
        name: "x".into(),
        ty: Ty::Int,
        value: b(Node::Int(3)),
        body: b(Node::Binary {
            op: BinOp::Add,
            lhs: b(Node::Var("x".into())),
            rhs: b(Node::Int(4)),
        }),
    };

    insta::assert_snapshot!(dump(&node), @"(let x int (int 3) (add (var x) (int 4)))");
}

#[test]
fn long_node_breaks_after_head() {
    let node = Node::Func {
        name: "inc".into(),
        params: vec![Param {
            name: "x".into(),
            ty: Ty::Int,
        }],
        ret: Ty::Int,
        body: b(Node::Binary {
            op: BinOp::Add,
            lhs: b(Node::Var("x".into())),
            rhs: b(Node::Int(1)),
        }),
        scope: b(Node::Call {
            func: "inc".into(),
            args: vec![Node::Int(41)],
        }),
    };

    insta::assert_snapshot!(dump(&node), @r"
    (func inc
      ((x int))
      int
      (add (var x) (int 1))
      (call inc (int 41)))
    ");
}

#[test]
fn leaves_and_types() {
    assert_eq!(dump(&Node::NaN(NumKind::Float)), "(nan float)");
    assert_eq!(dump(&Node::Float(1.0)), "(float 1.0)");
    assert_eq!(dump(&Node::Unit), "unit");
    assert_eq!(
        dump(&Node::Addr {
            addr: 2,
            pointee: Ty::Pair(Box::new(Ty::Int), Box::new(Ty::Bool)),
        }),
        "(addr 2 (pair int bool))"
    );
    assert_eq!(
        dump(&Node::Compare {
            op: CmpOp::Le,
            lhs: b(Node::Int(1)),
            rhs: b(Node::Int(2)),
        }),
        "(le (int 1) (int 2))"
    );
}

#[test]
fn records_and_lists() {
    let node = Node::GetField {
        record: b(Node::Record {
            fields: vec![RecordField {
                name: "xs".into(),
                ty: Ty::List(Box::new(Ty::Int)),
                value: Node::List {
                    elem: Ty::Int,
                    items: vec![Node::Int(1)],
                },
            }],
        }),
        field: "xs".into(),
    };

    insta::assert_snapshot!(dump(&node), @"(get (record (xs (list int) (list int (int 1)))) xs)");
}
