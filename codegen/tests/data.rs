use codegen::emit::CodeGen;
use codegen::error::Error;

macro_rules! directive_case {
    ($name:ident, $size:expr, $line:expr) => {
        #[test]
        fn $name() {
            let mut gen = CodeGen::new();
            gen.gen_static("x", "42", $size).unwrap();
            assert_eq!(gen.data(), concat!("section .data\n", $line));
        }
    };
}

directive_case!(byte_directive, 1, "x db 42\n");
directive_case!(word_directive, 2, "x dw 42\n");
directive_case!(dword_directive, 4, "x dd 42\n");
directive_case!(qword_directive, 8, "x dq 42\n");

#[test]
fn out_of_range_width_appends_nothing() {
    let mut gen = CodeGen::new();
    for size in [0u8, 3, 5, 16] {
        assert_eq!(gen.gen_static("x", "42", size).unwrap_err(), Error::InvalidWidth(size));
    }
    assert_eq!(gen.data(), "section .data\n");
}

#[test]
fn declarations_stay_in_order() {
    let mut gen = CodeGen::new();
    gen.gen_static("a", "1", 4).unwrap();
    gen.gen_static("b", "2", 4).unwrap();
    gen.gen_static("c", "3", 1).unwrap();
    assert_eq!(gen.data(), "section .data\na dd 1\nb dd 2\nc db 3\n");
    assert_eq!(gen.text(), "section .text\n_start:\n");
}

#[test]
fn reset_restores_the_initial_buffers() {
    let mut gen = CodeGen::new();
    gen.gen_static("a", "1", 4).unwrap();
    gen.gen_number(1).unwrap();
    gen.reset();

    let fresh = CodeGen::new();
    assert_eq!(gen.data(), fresh.data());
    assert_eq!(gen.text(), fresh.text());
    assert_eq!(gen.pending(), 0);
}

#[test]
fn finished_program_layout() {
    let mut gen = CodeGen::new();
    gen.gen_static("a", "0", 4).unwrap();
    gen.gen_number(3).unwrap();
    let program = gen.finish();
    assert_eq!(
        program.to_string(),
        "global _start\n\n\
         section .data\na dd 0\n\n\
         section .text\n_start:\nmov eax, 3\npush rax\n"
    );
}
