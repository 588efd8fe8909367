extern crate proc_macro;
use proc_macro::{TokenStream, TokenTree};

/// Builds a `Vec<Vec<bool>>` passability mask, one inner vec per row.
///
/// `X` is a wall, `.` an open square and `/` ends a row:
///
/// ```ignore
/// let mask = passability![
///     . . X /
///     . X . /
///     . . .
/// ];
/// ```
#[proc_macro]
pub fn passability(tokens: TokenStream) -> TokenStream {
    let rows = split_rows(tokens, "passability", |t| match t {
        TokenTree::Ident(l) => match l.to_string().as_str() {
            "X" => "false".to_string(),
            s => panic!("Cannot use Ident '{s}' in passability!"),
        },
        TokenTree::Punct(p) => match p.as_char() {
            '.' => "true".to_string(),
            s => panic!("Cannot use Punct '{s}' in passability!"),
        },
        s => panic!("Cannot use TokenTree '{:?}' in passability!", s),
    });
    emit_rows(rows, "passability")
}

/// Builds a `Vec<Vec<f64>>` weight mask from numeric literals, `/` ends a row.
#[proc_macro]
pub fn weights(tokens: TokenStream) -> TokenStream {
    let rows = split_rows(tokens, "weights", |t| match t {
        TokenTree::Literal(l) => {
            let s = l.to_string();
            match s.parse::<f64>() {
                Ok(w) => format!("{w:?}f64"),
                Err(_) => panic!("Cannot use Literal '{s}' in weights!"),
            }
        }
        s => panic!("Cannot use TokenTree '{:?}' in weights!", s),
    });
    emit_rows(rows, "weights")
}

fn split_rows<F>(tokens: TokenStream, name: &str, mut cell: F) -> Vec<Vec<String>>
where
    F: FnMut(TokenTree) -> String,
{
    let mut rows = vec![Vec::new()];
    for t in tokens {
        if let TokenTree::Punct(p) = &t {
            if p.as_char() == '/' {
                rows.push(Vec::new());
                continue;
            }
        }
        rows.last_mut()
            .expect("rows always has a current row")
            .push(cell(t));
    }
    if rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        panic!("{name}! needs at least one square");
    }
    if let Some(i) = rows.iter().position(|row| row.len() != rows[0].len()) {
        panic!("Row {i} of {name}! has a different length than the first row");
    }
    rows
}

fn emit_rows(rows: Vec<Vec<String>>, name: &str) -> TokenStream {
    let body = rows.iter().fold(String::new(), |mut acc, row| {
        acc += &format!("::std::vec![{}],", row.join(","));
        acc
    });
    format!("::std::vec![{body}]")
        .parse()
        .unwrap_or_else(|_| panic!("Output of {name}! should be valid"))
}
