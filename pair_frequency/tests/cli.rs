use assert_cmd::Command;

fn run(stdin: &str) -> Command {
    let mut cmd = Command::cargo_bin("pair_frequency").unwrap();
    cmd.write_stdin(stdin);
    cmd
}

#[test]
fn counts_equal_pairs() {
    run("great10\n").assert().success().stdout("7\n");
}

#[test]
fn repeated_char_is_squared() {
    run("aaaaaaaaaa\n").assert().success().stdout("100\n");
}

#[test]
fn empty_input_has_no_pairs() {
    run("").assert().success().stdout("0\n");
}
