#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Simulated execution of the code activity's Python-looking submissions.
//!
//! An ordered catalog of expected exercise shapes. Checks run first match
//! wins: once a branch produces a verdict, later branches are not
//! consulted, even if their substrings are also present.

use super::{rules::Submission, verdict::Verdict};

/// Editor output when the robot powers on.
const ACTIVE_OUTPUT: &str = "Kody aktif!";
/// Kody's reaction when power comes on.
const ACTIVE_RESPONSE: &str =
    "🤖 Beep beep! Sistem power aktif! Terima kasih sudah menghidupkan saya!";

/// Editor output when the robot stays asleep.
const ASLEEP_OUTPUT: &str = "Kody tidur...";
/// Kody's reaction when the sleep branch runs.
const ASLEEP_RESPONSE: &str =
    "🤖 Zzz... Sistem power off. Aku akan tidur sekarang. Level belum selesai - harus aktifkan \
     Kody!";
/// Kody's reaction when the if/else is right but power is off.
const CORRECT_BUT_OFF_RESPONSE: &str =
    "🤖 Kode sudah benar! Tapi aku tidur karena power = 'off'. Ganti ke 'on' untuk menyelesaikan \
     level!";

/// Hint comment asking for the missing `else:` block.
const MISSING_ELSE_OUTPUT: &str =
    "# Tambahkan blok 'else:' dan print('Kody tidur...') untuk kondisi power off";
/// Kody's reaction to the missing `else:` block.
const MISSING_ELSE_RESPONSE: &str = "🤖 Kode hampir benar! Tambahkan blok 'else:' ya!";

/// Editor output when the robot starts walking.
const WALKING_OUTPUT: &str = "Kody jalan!";
/// Kody's reaction when movement works.
const WALKING_RESPONSE: &str = "🤖 Wah! Aku bisa bergerak! Terima kasih sudah mengajariku bergerak!";

/// Hint comment when the shape looks right but the literals are off.
const STRUCTURE_HINT_OUTPUT: &str =
    "# Kode terlihat benar, tapi periksa format variabel dan kondisi if-else";
/// Kody's reaction to a near-miss structure.
const STRUCTURE_HINT_RESPONSE: &str =
    "🤖 Struktur kode sudah bagus! Periksa lagi nilai variabel dan kondisi if-else ya!";

/// Comment shown when nothing was recognized.
const GENERIC_OUTPUT: &str = "# Periksa kode Anda. Pastikan menggunakan sintaks yang benar.";
/// Kody's reaction when nothing was recognized.
const GENERIC_RESPONSE: &str = "🤖 Hmm... sepertinya ada yang salah dengan instruksinya. Coba lagi ya!";

/// Grades a submission against the exercise catalog.
///
/// Pure and deterministic, no side effects; safe to call concurrently.
/// Every submission yields an in-character verdict, matched or not.
pub fn grade(code: &str) -> Verdict {
    let sub = Submission::new(code);

    let matched = if sub.mentions("power =") {
        power_exercise(&sub)
    } else if sub.assigns("move", "maju") {
        movement_exercise(&sub)
    } else {
        None
    };

    matched.unwrap_or_else(|| fallback(&sub))
}

/// The power-control exercise: wake Kody up with an if/else on `power`.
fn power_exercise(sub: &Submission) -> Option<Verdict> {
    if sub.assigns("power", "on") && sub.tests("power", "on") && sub.prints("Kody aktif!") {
        return Some(
            Verdict::builder()
                .output(ACTIVE_OUTPUT)
                .kody_response(ACTIVE_RESPONSE)
                .success(true)
                .build(),
        );
    }

    if sub.assigns("power", "off") {
        // Reaching the sleep branch is valid code, but the level only
        // completes once Kody is powered on.
        if sub.tests("power", "on") && sub.has_else() && sub.mentions("Kody tidur") {
            return Some(asleep());
        }

        if sub.tests("power", "off") && sub.mentions("Kody tidur") {
            return Some(asleep());
        }

        if sub.tests("power", "on") {
            return Some(if sub.has_else() {
                Verdict::builder()
                    .output(ASLEEP_OUTPUT)
                    .kody_response(CORRECT_BUT_OFF_RESPONSE)
                    .build()
            } else {
                Verdict::builder()
                    .output(MISSING_ELSE_OUTPUT)
                    .kody_response(MISSING_ELSE_RESPONSE)
                    .build()
            });
        }
    }

    None
}

/// The movement exercise: teach Kody to walk forward.
fn movement_exercise(sub: &Submission) -> Option<Verdict> {
    if sub.tests("move", "maju") {
        return Some(
            Verdict::builder()
                .output(WALKING_OUTPUT)
                .kody_response(WALKING_RESPONSE)
                .success(true)
                .build(),
        );
    }

    None
}

/// Coaching verdicts for submissions nothing in the catalog matched.
fn fallback(sub: &Submission) -> Verdict {
    if sub.mentions("power =") && sub.mentions("if") && sub.mentions("print") {
        Verdict::builder()
            .output(STRUCTURE_HINT_OUTPUT)
            .kody_response(STRUCTURE_HINT_RESPONSE)
            .build()
    } else {
        Verdict::builder()
            .output(GENERIC_OUTPUT)
            .kody_response(GENERIC_RESPONSE)
            .build()
    }
}

/// Verdict for both spellings of the sleep branch.
fn asleep() -> Verdict {
    Verdict::builder()
        .output(ASLEEP_OUTPUT)
        .kody_response(ASLEEP_RESPONSE)
        .build()
}
