// ABOUTME: The bundled Simplex-source standard library, evaluated once at bootstrap

/// Source text for the handful of library functions that are easier to
/// express in Simplex itself than as native built-ins, evaluated on top of
/// the native registrations in `eval::bootstrap`.
///
/// `lambda` captures its defining scope by value, not by a live reference
/// (see `env::SymbolTable::snapshot`), so a lambda body has no way to refer
/// to the lambda it is the body of. Every recursive definition below uses
/// the self-passing idiom instead: a helper lambda takes an explicit extra
/// first parameter, `self`, and every recursive call passes its own `self`
/// argument along as that parameter. The public name then just supplies the
/// helper to itself once to start the recursion.
pub const BUNDLED_LIBRARY_SOURCE: &str = r#"
(let appendHelper
  (lambda self lst1 lst2
    (if (= lst1 nil)
        lst2
        (cons (car lst1) (self self (cdr lst1) lst2)))))
(let append
  (lambda lst1 lst2 (appendHelper appendHelper lst1 lst2)))

(let lenHelper
  (lambda self lst
    (if (= lst nil)
        0
        (+ 1 (self self (cdr lst))))))
(let len
  (lambda lst (lenHelper lenHelper lst)))

(let reverseHelper
  (lambda self lst acc
    (if (= lst nil)
        acc
        (self self (cdr lst) (cons (car lst) acc)))))
(let reverse
  (lambda lst (reverseHelper reverseHelper lst nil)))

(let <=
  (lambda a b (if (< a b) true (= a b))))
(let >=
  (lambda a b (if (> a b) true (= a b))))

(let newlineByte (car '
'))

(let readLineHelper
  (lambda self acc
    (sequence
      (let b (read))
      (cond
        (= b nil) (reverse acc)
        (= b newlineByte) (reverse acc)
        true (self self (cons b acc))))))
(let readLine
  (lambda
    (sequence
      (let result (readLineHelper readLineHelper nil))
      (if (= result nil) (cons nil nil) result))))
"#;
