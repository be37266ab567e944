//! Per-language keyword lists
//!
//! Space-delimited strings handed verbatim to the widget's keyword sets; the
//! styler never splits or reorders them. Index in the returned slice is the
//! keyword-set slot.

use crate::language::id::Language;

const C_KEYWORDS: &[&str] = &[
    "auto break case char const continue default do double else enum extern float for goto if \
     inline int long register restrict return short signed sizeof static struct switch typedef \
     union unsigned void volatile while",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas alignof and and_eq asm auto bitand bitor bool break case catch char class compl \
     const const_cast constexpr continue decltype default delete do double dynamic_cast else \
     enum explicit export extern false float for friend goto if inline int long mutable \
     namespace new noexcept not not_eq nullptr operator or or_eq private protected public \
     register reinterpret_cast return short signed sizeof static static_cast struct switch \
     template this throw true try typedef typeid typename union unsigned using virtual void \
     volatile wchar_t while xor xor_eq",
    // Type-word set
    "size_t ptrdiff_t intptr_t uintptr_t int8_t int16_t int32_t int64_t uint8_t uint16_t \
     uint32_t uint64_t string wstring vector map set list deque pair",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract as base bool break byte case catch char checked class const continue decimal \
     default delegate do double else enum event explicit extern false finally fixed float for \
     foreach goto if implicit in int interface internal is lock long namespace new null object \
     operator out override params private protected public readonly ref return sbyte sealed \
     short sizeof stackalloc static string struct switch this throw true try typeof uint ulong \
     unchecked unsafe ushort using virtual void volatile while",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract assert boolean break byte case catch char class const continue default do double \
     else enum extends final finally float for goto if implements import instanceof int \
     interface long native new package private protected public return short static strictfp \
     super switch synchronized this throw throws transient try void volatile while",
];

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "break case catch class const continue debugger default delete do else export extends \
     false finally for function if import in instanceof let new null return super switch this \
     throw true try typeof var void while with yield",
];

const PHP_KEYWORDS: &[&str] = &[
    "abstract and array as break callable case catch class clone const continue declare \
     default do echo else elseif empty enddeclare endfor endforeach endif endswitch endwhile \
     extends final finally fn for foreach function global goto if implements include \
     include_once instanceof insteadof interface isset list namespace new or print private \
     protected public require require_once return static switch throw trait try unset use var \
     while xor",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and as assert async await break class continue def del elif else except finally for from \
     global if import in is lambda nonlocal not or pass raise return try while with yield \
     False None True",
];

const PERL_KEYWORDS: &[&str] = &[
    "chomp chop chr close cmp defined delete die do each else elsif eq eval exists exit for \
     foreach ge gt if join keys last lc le length local lt map my ne next no open or our pop \
     print printf push ref return reverse scalar shift sort splice split sprintf sub substr \
     uc undef unless unshift until use values wantarray while",
];

const RUBY_KEYWORDS: &[&str] = &[
    "alias and begin break case class def defined? do else elsif end ensure false for if in \
     module next nil not or redo rescue retry return self super then true undef unless until \
     when while yield",
];

const LUA_KEYWORDS: &[&str] = &[
    "and break do else elseif end false for function goto if in local nil not or repeat \
     return then true until while",
    // Standard library set
    "assert collectgarbage dofile error getmetatable ipairs load loadstring next pairs pcall \
     print rawequal rawget rawlen rawset require select setmetatable tonumber tostring type \
     unpack xpcall",
];

const HTML_KEYWORDS: &[&str] = &[
    "a abbr address area article aside audio b base bdi bdo blockquote body br button canvas \
     caption cite code col colgroup data datalist dd del details dfn dialog div dl dt em embed \
     fieldset figcaption figure footer form h1 h2 h3 h4 h5 h6 head header hr html i iframe img \
     input ins kbd label legend li link main map mark meta meter nav noscript object ol \
     optgroup option output p param picture pre progress q rp rt ruby s samp script section \
     select small source span strong style sub summary sup table tbody td template textarea \
     tfoot th thead time title tr track u ul var video wbr",
];

const CSS_KEYWORDS: &[&str] = &[
    "background background-color background-image border border-color border-radius bottom \
     color cursor display flex float font font-family font-size font-style font-weight height \
     left letter-spacing line-height margin max-height max-width min-height min-width opacity \
     overflow padding position right text-align text-decoration top vertical-align visibility \
     white-space width z-index",
];

const SQL_KEYWORDS: &[&str] = &[
    "all alter and any as asc begin between by case check commit create cross delete desc \
     distinct drop else end exists foreign from full group having in index inner insert into \
     is join key left like limit not null on or order outer primary references right rollback \
     select set table then union unique update values view where",
];

const PASCAL_KEYWORDS: &[&str] = &[
    "absolute abstract and array as asm assembler begin case cdecl class const constructor \
     destructor div do downto else end except exports external far file finalization finally \
     for forward function goto if implementation in inherited initialization inline interface \
     is label library mod near nil not object of on or packed private procedure program \
     property protected public published raise record repeat set shl shr string then threadvar \
     to try type unit until uses var virtual while with xor",
];

const VB_KEYWORDS: &[&str] = &[
    "and as boolean byref byte byval call case class const currency date dim do double each \
     else elseif end enum erase error event exit false for function get global goto if \
     implements in integer is let lib like long loop me mod new next not nothing object on \
     optional or private property public redim rem resume select set single static step stop \
     string sub then to true type until variant wend while with xor",
];

const FORTRAN_KEYWORDS: &[&str] = &[
    "allocatable allocate block call case character common complex contains continue cycle \
     data deallocate dimension do double else elseif elsewhere end enddo endif entry \
     equivalence exit external forall format function goto if implicit integer intent \
     interface intrinsic kind logical module namelist nullify only operator optional \
     parameter pointer precision print private procedure program public pure real recursive \
     result return save select sequence stop subroutine target then type use where while \
     write",
];

const TEX_KEYWORDS: &[&str] = &[
    "begin end documentclass usepackage section subsection subsubsection chapter paragraph \
     label ref cite emph textbf textit texttt item itemize enumerate tabular figure caption \
     includegraphics newcommand renewcommand input include title author date maketitle",
];

const MAKEFILE_KEYWORDS: &[&str] = &[
    "define else endef endif export ifdef ifeq ifndef ifneq include override unexport vpath",
];

const BATCH_KEYWORDS: &[&str] = &[
    "call cd cls copy del dir do echo else endlocal errorlevel exist exit for goto if md mkdir \
     move not nul pause rd rem ren rename rmdir set setlocal shift start title type",
];

const BASH_KEYWORDS: &[&str] = &[
    "alias break case cat cd chmod chown continue cp do done echo elif else esac eval exec \
     exit export fi find for function grep if in kill local ls mkdir mv pwd read return rm \
     sed set shift source test then touch trap umask unset until while",
];

const RC_KEYWORDS: &[&str] = &[
    "ACCELERATORS BITMAP CAPTION CURSOR DIALOG DIALOGEX FONT ICON MENU MENUEX MENUITEM \
     POPUP RCDATA STRINGTABLE STYLE VERSIONINFO",
];

const ASP_KEYWORDS: &[&str] = &[
    "and call case class const dim do each else elseif end erase error exit false for function \
     if in is loop next not nothing on option or private public redim rem response request \
     select server session set sub then to true until wend while with",
];

const NSIS_KEYWORDS: &[&str] = &[
    "Function FunctionEnd Section SectionEnd SectionIn SubSection SubSectionEnd Page PageEx \
     PageExEnd Var Call Goto Return Abort DetailPrint File InstallDir Name OutFile RMDir \
     SetOutPath WriteRegStr WriteUninstaller",
];

const ACTIONSCRIPT_KEYWORDS: &[&str] = &[
    "break case catch class const continue default delete do dynamic each else extends false \
     final finally for function get if implements import in include interface internal is \
     namespace native new null override package private protected public return set static \
     super switch this throw true try typeof use var void while with",
];

/// Keyword sets for a language, indexed by keyword-set slot. Languages whose
/// lexing needs no word lists return an empty slice.
pub fn keyword_sets(language: Language) -> &'static [&'static str] {
    match language {
        Language::C => C_KEYWORDS,
        Language::Cpp | Language::ObjectiveC => CPP_KEYWORDS,
        Language::CSharp => CSHARP_KEYWORDS,
        Language::Java => JAVA_KEYWORDS,
        Language::JavaScript => JAVASCRIPT_KEYWORDS,
        Language::Php => PHP_KEYWORDS,
        Language::Python => PYTHON_KEYWORDS,
        Language::Perl => PERL_KEYWORDS,
        Language::Ruby => RUBY_KEYWORDS,
        Language::Lua => LUA_KEYWORDS,
        Language::Html => HTML_KEYWORDS,
        Language::Css => CSS_KEYWORDS,
        Language::Sql => SQL_KEYWORDS,
        Language::Pascal => PASCAL_KEYWORDS,
        Language::VisualBasic => VB_KEYWORDS,
        Language::Fortran => FORTRAN_KEYWORDS,
        Language::Tex => TEX_KEYWORDS,
        Language::Makefile => MAKEFILE_KEYWORDS,
        Language::Batch => BATCH_KEYWORDS,
        Language::Bash => BASH_KEYWORDS,
        Language::Rc => RC_KEYWORDS,
        Language::Asp => ASP_KEYWORDS,
        Language::Nsis => NSIS_KEYWORDS,
        Language::ActionScript => ACTIONSCRIPT_KEYWORDS,
        Language::Text | Language::Xml | Language::Ini | Language::Nfo => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpp_has_type_word_set() {
        let sets = keyword_sets(Language::Cpp);
        assert_eq!(sets.len(), 2);
        assert!(sets[0].split_whitespace().any(|w| w == "constexpr"));
        assert!(sets[1].split_whitespace().any(|w| w == "size_t"));
    }

    #[test]
    fn test_markup_languages_without_word_lists() {
        assert!(keyword_sets(Language::Xml).is_empty());
        assert!(keyword_sets(Language::Text).is_empty());
    }

    #[test]
    fn test_lists_are_space_delimited() {
        for lang in [Language::Python, Language::Sql, Language::Bash] {
            for set in keyword_sets(lang) {
                assert!(!set.contains(','), "{lang:?} list should be space-delimited");
            }
        }
    }
}
