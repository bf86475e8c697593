//! Human-readable s-expression dump of Tern IR.
//!
//! A list prints on one line when it fits in `WIDTH` columns from its
//! indentation; otherwise its head (and the atoms right after it) stay on the
//! first line and every other element goes on its own line, two spaces deeper.

use crate::node::{Node, NumKind, Ty};

const WIDTH: usize = 60;

enum Sexp {
    Atom(String),
    List(Vec<Sexp>),
}

fn atom(s: impl Into<String>) -> Sexp {
    Sexp::Atom(s.into())
}

fn list(head: &str, rest: impl IntoIterator<Item = Sexp>) -> Sexp {
    let mut items = vec![atom(head)];
    items.extend(rest);
    Sexp::List(items)
}

/// Render a node as an indented s-expression.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    render(&node_sexp(node), 0, &mut out);
    out
}

fn ty_sexp(ty: &Ty) -> Sexp {
    match ty {
        Ty::Int => atom("int"),
        Ty::Float => atom("float"),
        Ty::Bool => atom("bool"),
        Ty::Unit => atom("unit"),
        Ty::Func(a, b) => list("fn", [ty_sexp(a), ty_sexp(b)]),
        Ty::Pair(a, b) => list("pair", [ty_sexp(a), ty_sexp(b)]),
        Ty::List(t) => list("list", [ty_sexp(t)]),
        Ty::Ref(t) => list("ref", [ty_sexp(t)]),
        Ty::Record(fields) => list(
            "record",
            fields
                .iter()
                .map(|(name, ty)| Sexp::List(vec![atom(name.as_str()), ty_sexp(ty)])),
        ),
    }
}

fn node_sexp(node: &Node) -> Sexp {
    match node {
        Node::Int(v) => list("int", [atom(v.to_string())]),
        Node::Float(v) => list("float", [atom(format!("{v:?}"))]),
        Node::NaN(NumKind::Int) => list("nan", [atom("int")]),
        Node::NaN(NumKind::Float) => list("nan", [atom("float")]),
        Node::Bool(b) => list("bool", [atom(b.to_string())]),
        Node::Unit => atom("unit"),
        Node::Var(name) => list("var", [atom(name.as_str())]),
        Node::If {
            cond,
            then_branch,
            else_branch,
        } => list(
            "if",
            [node_sexp(cond), node_sexp(then_branch), node_sexp(else_branch)],
        ),
        Node::Let {
            name,
            ty,
            value,
            body,
        } => list(
            "let",
            [
                atom(name.as_str()),
                ty_sexp(ty),
                node_sexp(value),
                node_sexp(body),
            ],
        ),
        Node::Call { func, args } => list(
            "call",
            std::iter::once(atom(func.as_str())).chain(args.iter().map(node_sexp)),
        ),
        Node::Binary { op, lhs, rhs } => list(op.mnemonic(), [node_sexp(lhs), node_sexp(rhs)]),
        Node::Compare { op, lhs, rhs } => list(op.mnemonic(), [node_sexp(lhs), node_sexp(rhs)]),
        Node::Pair { first, second } => list("pair", [node_sexp(first), node_sexp(second)]),
        Node::First(e) => list("first", [node_sexp(e)]),
        Node::Second(e) => list("second", [node_sexp(e)]),
        Node::List { elem, items } => list(
            "list",
            std::iter::once(ty_sexp(elem)).chain(items.iter().map(node_sexp)),
        ),
        Node::Cons { head, tail } => list("cons", [node_sexp(head), node_sexp(tail)]),
        Node::Head(e) => list("head", [node_sexp(e)]),
        Node::Tail(e) => list("tail", [node_sexp(e)]),
        Node::IsEmpty(e) => list("empty?", [node_sexp(e)]),
        Node::Alloc(e) => list("alloc", [node_sexp(e)]),
        Node::Addr { addr, pointee } => list("addr", [atom(addr.to_string()), ty_sexp(pointee)]),
        Node::Load(e) => list("load", [node_sexp(e)]),
        Node::Store { target, value } => list("store", [node_sexp(target), node_sexp(value)]),
        Node::Seq { first, second } => list("seq", [node_sexp(first), node_sexp(second)]),
        Node::While { cond, body } => list("while", [node_sexp(cond), node_sexp(body)]),
        Node::Func {
            name,
            params,
            ret,
            body,
            scope,
        } => {
            let params = params
                .iter()
                .map(|p| Sexp::List(vec![atom(p.name.as_str()), ty_sexp(&p.ty)]))
                .collect();
            list(
                "func",
                [
                    atom(name.as_str()),
                    Sexp::List(params),
                    ty_sexp(ret),
                    node_sexp(body),
                    node_sexp(scope),
                ],
            )
        }
        Node::Record { fields } => list(
            "record",
            fields.iter().map(|f| {
                Sexp::List(vec![
                    atom(f.name.as_str()),
                    ty_sexp(&f.ty),
                    node_sexp(&f.value),
                ])
            }),
        ),
        Node::GetField { record, field } => {
            list("get", [node_sexp(record), atom(field.as_str())])
        }
    }
}

fn flat(sexp: &Sexp, out: &mut String) {
    match sexp {
        Sexp::Atom(s) => out.push_str(s),
        Sexp::List(items) => {
            out.push('(');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                flat(item, out);
            }
            out.push(')');
        }
    }
}

fn render(sexp: &Sexp, indent: usize, out: &mut String) {
    let mut line = String::new();
    flat(sexp, &mut line);

    let Sexp::List(items) = sexp else {
        out.push_str(&line);
        return;
    };
    if indent + line.len() <= WIDTH || items.len() < 2 {
        out.push_str(&line);
        return;
    }

    // Head plus any atoms right after it share the opening line.
    let inline = items
        .iter()
        .skip(1)
        .take_while(|item| matches!(item, Sexp::Atom(_)))
        .count()
        + 1;

    out.push('(');
    for (i, item) in items[..inline].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        flat(item, out);
    }
    for item in &items[inline..] {
        out.push('\n');
        out.push_str(&" ".repeat(indent + 2));
        render(item, indent + 2, out);
    }
    out.push(')');
}
