//! Built-in ISO 4217 currency table.
//!
//! Each row is `(code, grapheme, template, decimal, thousand, fraction)`.
//! Templates use `1` for the number and `$` for the grapheme.

pub(crate) type IsoRow = (&'static str, &'static str, &'static str, &'static str, &'static str, u32);

pub(crate) const ISO_CURRENCIES: &[IsoRow] = &[
    ("AED", ".\u{62f}.\u{625}", "1 $", ".", ",", 2),
    ("AFN", "\u{60b}", "1 $", ".", ",", 2),
    ("ALL", "L", "$1", ".", ",", 2),
    ("AMD", "\u{58f}", "1 $", ".", ",", 2),
    ("ARS", "$", "$1", ",", ".", 2),
    ("AUD", "$", "$1", ".", ",", 2),
    ("AZN", "\u{20bc}", "$1", ".", ",", 2),
    ("BAM", "KM", "$1", ",", ".", 2),
    ("BDT", "\u{9f3}", "$1", ".", ",", 2),
    ("BGN", "\u{43b}\u{432}", "$1", ",", ".", 2),
    ("BHD", ".\u{62f}.\u{628}", "1 $", ".", ",", 3),
    ("BRL", "R$", "$1", ",", ".", 2),
    ("BYN", "p.", "1 $", ",", " ", 2),
    ("CAD", "$", "$1", ".", ",", 2),
    ("CHF", "CHF", "1 $", ".", ",", 2),
    ("CLP", "$", "$1", "", ".", 0),
    ("CNY", "\u{5143}", "1 $", ".", ",", 2),
    ("COP", "$", "$1", ",", ".", 2),
    ("CZK", "K\u{10d}", "1 $", ",", ".", 2),
    ("DKK", "kr", "$ 1", ",", ".", 2),
    ("EGP", "\u{a3}", "$1", ".", ",", 2),
    ("EUR", "\u{20ac}", "$1", ".", ",", 2),
    ("GBP", "\u{a3}", "$1", ".", ",", 2),
    ("GEL", "\u{10da}", "1 $", ".", ",", 2),
    ("HKD", "$", "$1", ".", ",", 2),
    ("HUF", "Ft", "$1", ",", ".", 2),
    ("IDR", "Rp", "$1", ",", ".", 2),
    ("ILS", "\u{20aa}", "$1", ".", ",", 2),
    ("INR", "\u{20b9}", "$1", ".", ",", 2),
    ("IQD", ".\u{639}.\u{62f}", "1 $", ".", ",", 3),
    ("ISK", "kr", "$1", ",", ".", 0),
    ("JOD", ".\u{62f}.\u{625}", "1 $", ".", ",", 3),
    ("JPY", "\u{a5}", "$1", ".", ",", 0),
    ("KES", "KSh", "$1", ".", ",", 2),
    ("KRW", "\u{20a9}", "$1", ".", ",", 0),
    ("KWD", ".\u{62f}.\u{643}", "1 $", ".", ",", 3),
    ("KZT", "\u{20b8}", "$1", ".", ",", 2),
    ("LKR", "\u{20a8}", "$1", ".", ",", 2),
    ("MAD", ".\u{62f}.\u{645}", "1 $", ".", ",", 2),
    ("MXN", "$", "$1", ".", ",", 2),
    ("MYR", "RM", "$1", ".", ",", 2),
    ("NGN", "\u{20a6}", "$1", ".", ",", 2),
    ("NOK", "kr", "1 $", ",", ".", 2),
    ("NZD", "$", "$1", ".", ",", 2),
    ("OMR", "\u{fdfc}", "1 $", ".", ",", 3),
    ("PEN", "S/", "$1", ".", ",", 2),
    ("PHP", "\u{20b1}", "$1", ".", ",", 2),
    ("PKR", "\u{20a8}", "$1", ".", ",", 2),
    ("PLN", "z\u{142}", "1 $", ",", ".", 2),
    ("QAR", "\u{fdfc}", "1 $", ".", ",", 2),
    ("RON", "lei", "$1", ",", ".", 2),
    ("RSD", "\u{414}\u{438}\u{43d}.", "$1", ".", ",", 2),
    ("RUB", "\u{20bd}", "1 $", ",", ".", 2),
    ("SAR", "\u{fdfc}", "1 $", ".", ",", 2),
    ("SEK", "kr", "1 $", ",", ".", 2),
    ("SGD", "$", "$1", ".", ",", 2),
    ("THB", "\u{e3f}", "$1", ".", ",", 2),
    ("TND", ".\u{62f}.\u{62a}", "1 $", ".", ",", 3),
    ("TRY", "\u{20ba}", "$1", ".", ",", 2),
    ("TWD", "NT$", "$1", ".", ",", 2),
    ("UAH", "\u{20b4}", "$1", ".", ",", 2),
    ("USD", "$", "$1", ".", ",", 2),
    ("UYU", "$", "$1", ",", ".", 2),
    ("VND", "\u{20ab}", "1 $", ",", ".", 0),
    ("XAF", "Fr", "1 $", ".", ",", 0),
    ("XOF", "CFA", "1 $", ".", ",", 0),
    ("ZAR", "R", "$1", ".", ",", 2),
];
