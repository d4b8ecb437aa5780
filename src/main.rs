use color_print::cformat;
use minifront::parser::ast::Profile;
use minifront::parser::lexer::Lexer;
use minifront::parser::parse::Parser;
use minifront::printer;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

/// Built-in sample for the boolean profile, used when no file is given.
const BOOL_SAMPLE: &str = "\
a := 'T';
b := 'F' or a;
c := not (a and b) xor 'T';
";

/// Built-in sample for the C-like profile, used when no file is given.
const CLIKE_SAMPLE: &str = "\
int total = 0;
for (int i = 0; i < 10; i++) {
    if (i % 2 == 0) {
        total += i;
    }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ProfileArg {
    /// Boolean-expression/assignment language
    Bool,
    /// Restricted C-like statement/expression subset
    Clike,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Bool => Profile::Bool,
            ProfileArg::Clike => Profile::CLike,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file; a built-in sample for the profile is parsed if omitted
    input: Option<String>,

    /// Language profile to scan and parse with
    #[clap(short, long, value_enum, default_value = "clike")]
    profile: ProfileArg,

    /// Dump the token stream before the tree
    #[clap(short, long)]
    tokens: bool,
}

fn main() {
    use clap::Parser as _;

    let args: Args = Args::parse();
    let profile: Profile = args.profile.into();

    let source = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .expect(&cformat!("<r,s>Failed to read file</>: {}", path)),
        None => match profile {
            Profile::Bool => BOOL_SAMPLE.to_string(),
            Profile::CLike => CLIKE_SAMPLE.to_string(),
        },
    };

    let (tokens, lex_errors) = Lexer::new(&source, profile).tokenize();

    if args.tokens {
        for token in &tokens {
            println!(
                "{:>4}:{:<3} {:?} {}",
                token.location.line, token.location.column, token.kind, token.lexeme
            );
        }
        println!();
    }

    let (root, syntax_errors) = Parser::new(tokens, profile).parse_program();

    // Lexical diagnostics first, then syntactic, each in source order
    for err in &lex_errors {
        println!(
            "{}",
            cformat!(
                "<y,s>Lexical error</> at line {}, column {}: {}",
                err.location.line,
                err.location.column,
                err.message
            )
        );
    }
    for err in &syntax_errors {
        println!(
            "{}",
            cformat!(
                "<r,s>Syntax error</> at line {}, column {}: {}",
                err.location.line,
                err.location.column,
                err.message
            )
        );
    }
    if !lex_errors.is_empty() || !syntax_errors.is_empty() {
        println!();
    }

    print!("{}", printer::render(&root));
}
